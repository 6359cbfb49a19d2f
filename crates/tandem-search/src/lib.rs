//! `tandem-search` — beam search and two-agent partition driver.
//!
//! # Search pipeline
//!
//! ```text
//! best_two_agent_schedule(dm, config):
//!   ① Validate  — PlanConfig checked before any work (fail fast).
//!   ② Partition — enumerate 2^(k-1) unordered splits of the k value
//!                 sites (one site pinned to agent A to kill the
//!                 symmetric duplicates).
//!   ③ Solve ×2  — run the single-agent beam search independently on
//!                 each half of the split; sum the two results.
//!   ④ Reduce    — maximum over all splits, folded per worker bucket
//!                 and joined with try_reduce (any error aborts).
//! ```
//!
//! The single-agent [`solve`] is a forward time expansion: a pending queue
//! keyed by arrival tick feeds a per-tick frontier bounded to the top
//! `beam_width` states by accumulated value.  States outside the beam are
//! pruned permanently, so results are exact only up to that heuristic —
//! a wider beam can raise the answer, never lower it.

pub mod driver;
pub mod error;
pub mod pending;
pub mod solver;
pub mod state;


pub use driver::{best_single_agent_schedule, best_two_agent_schedule, partition_count};
pub use error::{SearchError, SearchResult};
pub use pending::PendingQueue;
pub use solver::solve;
pub use state::AgentState;
