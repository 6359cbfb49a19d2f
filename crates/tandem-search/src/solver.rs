//! Single-agent bounded beam search.

use std::cmp::Reverse;

use tandem_core::Tick;
use tandem_graph::{DistanceMatrix, SiteMask};

use crate::{AgentState, PendingQueue, SearchError, SearchResult};

/// Best accumulated value one agent can reach within `budget` ticks, when
/// restricted to activating only the sites in `allowed`.
///
/// # Algorithm
///
/// Forward time expansion over discrete ticks.  At each tick the states
/// arriving from the [`PendingQueue`] form the frontier, which is cut to
/// the `beam_width` highest accumulated values.  Each retained state emits:
///
/// - a **coast** successor one tick later (keep accruing the current rate;
///   this is how a state that has opened everything it wants still reaches
///   the budget with the right total), and
/// - one **open** successor per still-closed allowed site, scheduled
///   `hops + 1` ticks out (travel plus the activation tick).  Successors
///   that would arrive after the budget can never be selected and are
///   discarded at emission.
///
/// At `t == budget` the answer is the best value in the frontier.
///
/// # Accuracy
///
/// States cut from the frontier are pruned permanently, so the result is a
/// heuristic: a lower bound on the true optimum that is non-decreasing in
/// `beam_width` (a wider beam retains a strict superset of states; see
/// `retain_top` for how ties at the cut boundary keep that guarantee).
///
/// # Errors
///
/// [`SearchError::InvalidBeamWidth`] if `beam_width == 0`.
pub fn solve(
    allowed: SiteMask,
    budget: Tick,
    dm: &DistanceMatrix,
    beam_width: usize,
) -> SearchResult<u64> {
    if beam_width == 0 {
        return Err(SearchError::InvalidBeamWidth);
    }

    // Stray bits (the start bit, indices past k) can never be activated.
    let allowed = allowed & dm.value_sites();

    let mut pending = PendingQueue::new();
    pending.push(Tick::ZERO, AgentState::initial());

    // Reused across ticks — drained and refilled, never reallocated.
    let mut frontier: Vec<AgentState> = Vec::new();

    let mut now = Tick::ZERO;
    loop {
        frontier.clear();
        if let Some(arriving) = pending.drain_tick(now) {
            frontier.extend(arriving);
        }
        retain_top(&mut frontier, beam_width);

        if now == budget {
            // The coast chain keeps at least one state alive every tick, so
            // the frontier is never empty here; 0 covers the degenerate
            // empty-allowed, zero-budget cases all the same.
            return Ok(frontier.iter().map(|s| s.value).max().unwrap_or(0));
        }

        for &s in &frontier {
            pending.push(now + 1, s.coast());

            for site in allowed.minus(s.opened) {
                let dt = u32::from(dm.hops(s.pos, site)) + 1;
                let arrival = now + dt;
                if arrival > budget {
                    continue;
                }
                pending.push(arrival, s.open(site, dt, dm.rate(site)));
            }
        }

        now = now + 1;
    }
}

/// Cut `frontier` to its `k` highest-value states.
///
/// Sorts by a total order (value first, then rate, position, opened set as
/// tie-breaks) and truncates.  The tie-breaks carry no meaning of their
/// own; they make the retained set a prefix of one fixed ordering, so a
/// wider beam always retains a superset of a narrower one — the property
/// that makes results monotone in `beam_width` even through ties.
fn retain_top(frontier: &mut Vec<AgentState>, k: usize) {
    if frontier.len() > k {
        frontier.sort_unstable_by_key(|s| (Reverse(s.value), Reverse(s.rate), s.pos, s.opened.0));
        frontier.truncate(k);
    }
}
