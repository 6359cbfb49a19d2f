//! `tandem-graph` — site network, distance oracle, and site bitmasks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`network`]  | `SiteNetwork` (CSR), `SiteNetworkBuilder`, `SiteDesc`    |
//! | [`distance`] | `DistanceMatrix` — all-pairs BFS over the value sites    |
//! | [`mask`]     | `SiteMask` — bitset over compact distance-matrix indices |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to embedded core types.  |

pub mod distance;
pub mod error;
pub mod mask;
pub mod network;

#[cfg(test)]
mod tests;

pub use distance::DistanceMatrix;
pub use error::{GraphError, GraphResult};
pub use mask::SiteMask;
pub use network::{SiteDesc, SiteNetwork, SiteNetworkBuilder};
