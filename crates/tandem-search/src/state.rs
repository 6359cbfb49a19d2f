//! Immutable per-agent search state.

use tandem_graph::SiteMask;

/// One candidate state of a single agent at a known tick.
///
/// States are small `Copy` records produced by applying a transition to a
/// predecessor; nothing is ever mutated in place.  The tick a state belongs
/// to is carried by its position in the [`PendingQueue`][crate::PendingQueue],
/// not by the state itself.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AgentState {
    /// Value accumulated so far.
    pub value: u64,
    /// Sum of the rates of every site this agent has activated.  Held as
    /// `u64` so adding per-site `u32` rates can never overflow.
    pub rate: u64,
    /// Current position, as a compact distance-matrix index.
    pub pos: usize,
    /// Compact sites already activated by this agent.
    pub opened: SiteMask,
}

impl AgentState {
    /// The state every plan starts from: at the start site, nothing
    /// activated, nothing accrued.
    pub fn initial() -> AgentState {
        AgentState { value: 0, rate: 0, pos: 0, opened: SiteMask::EMPTY }
    }

    /// Wait one tick in place, accruing one tick of the current rate.
    #[inline]
    pub fn coast(self) -> AgentState {
        AgentState { value: self.value + self.rate, ..self }
    }

    /// Travel to `site` and activate it.
    ///
    /// `dt` is the full transition cost in ticks (hop count plus one tick
    /// for the activation itself); the current rate accrues for all of it.
    /// `rate` is the newly activated site's rate, effective from the
    /// arrival tick onward.
    #[inline]
    pub fn open(self, site: usize, dt: u32, rate: u32) -> AgentState {
        AgentState {
            value:  self.value + u64::from(dt) * self.rate,
            rate:   self.rate + u64::from(rate),
            pos:    site,
            opened: self.opened.with(site),
        }
    }
}
