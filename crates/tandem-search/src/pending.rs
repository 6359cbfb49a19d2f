//! `PendingQueue` — sparse per-tick state activation queue.
//!
//! # Why this exists
//!
//! Most successor states the beam search emits become live several ticks in
//! the future (an agent in transit plus its activation tick).  Scanning
//! every emitted state at every tick would cost O(all pending) per tick
//! regardless of how many actually arrive.
//!
//! `PendingQueue` inverts the problem: a successor is filed under its
//! arrival tick when it is emitted, and each tick the solver drains only
//! the states scheduled for exactly that tick — O(arriving) work.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and drain where W = number of distinct
//! future ticks currently enqueued.  W is bounded by the plan budget (tens
//! of ticks), so the constant is tiny.

use std::collections::BTreeMap;

use tandem_core::Tick;

use crate::AgentState;

/// A priority-queue mapping ticks → states that become live at that tick.
#[derive(Default)]
pub struct PendingQueue {
    inner: BTreeMap<Tick, Vec<AgentState>>,
    /// Cached total state count for O(1) `len()`.
    total: usize,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `state` to become live at `tick`.
    ///
    /// Duplicate states at the same tick are kept as-is; the solver's
    /// per-tick top-K selection handles them naturally.
    pub fn push(&mut self, tick: Tick, state: AgentState) {
        self.inner.entry(tick).or_default().push(state);
        self.total += 1;
    }

    /// Remove and return all states scheduled for exactly `tick`.
    ///
    /// Returns `None` if nothing is queued for that tick (avoids
    /// allocation on quiet ticks).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<AgentState>> {
        let states = self.inner.remove(&tick)?;
        self.total -= states.len();
        Some(states)
    }

    /// The earliest tick with at least one queued state, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued states across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks that have at least one queued state.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
