//! Planner time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one unit
//! of the plan's shared budget: moving one hop costs a tick, performing an
//! activation costs a tick, and an activated site releases its value rate
//! once per remaining tick.  Using an integer tick as the canonical time
//! unit keeps all schedule arithmetic exact and comparisons O(1).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute plan tick counter.
///
/// Stored as `u32`: budgets are tens of ticks in practice, and every arrival
/// time the planner schedules is bounded by the budget.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u32) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Tick) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── PlanConfig ────────────────────────────────────────────────────────────────

/// Top-level planner configuration.
///
/// Typically loaded from a TOML/JSON file or CLI flags by the application
/// crate and passed to the partition driver.  `time_budget` is kept signed
/// because it arrives from an external surface where a negative value is
/// representable; [`validate`](Self::validate) rejects it before any search
/// work begins.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConfig {
    /// Shared number of ticks each agent operates for.  Must be >= 0.
    pub time_budget: i64,

    /// Maximum number of candidate states retained per tick by the beam
    /// search.  Must be >= 1.  Larger values trade speed for accuracy; the
    /// result is only guaranteed optimal up to this pruning heuristic.
    pub beam_width: usize,

    /// Worker thread count for the partition search.  Must be >= 1.
    pub workers: usize,
}

impl PlanConfig {
    /// Check every field against its contract.
    ///
    /// Called by the search driver before any work starts, so a bad
    /// configuration fails fast instead of poisoning a partial result.
    pub fn validate(&self) -> CoreResult<()> {
        if self.time_budget < 0 {
            return Err(CoreError::Config(format!(
                "time budget must be non-negative (got {})",
                self.time_budget
            )));
        }
        if self.beam_width == 0 {
            return Err(CoreError::Config(
                "beam width must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(CoreError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The validated budget as a [`Tick`].
    ///
    /// # Panics
    /// Panics in debug mode if called on a config that fails [`validate`](Self::validate).
    #[inline]
    pub fn budget(&self) -> Tick {
        debug_assert!(self.time_budget >= 0);
        Tick(self.time_budget as u32)
    }
}
