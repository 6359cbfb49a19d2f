//! `tandem-core` — foundational types for the `tandem` activation planner.
//!
//! This crate is a dependency of every other `tandem-*` crate.  It
//! intentionally has no `tandem-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`ids`]     | `SiteId`                                   |
//! | [`time`]    | `Tick`, `PlanConfig`                       |
//! | [`error`]   | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::SiteId;
pub use time::{PlanConfig, Tick};
