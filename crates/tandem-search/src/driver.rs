//! Two-agent partition search driver.
//!
//! # Partition enumeration
//!
//! A split assigns each of the k value sites to agent A or agent B.  The
//! two agents are interchangeable, so `(m, ~m)` and `(~m, m)` are the same
//! unordered partition; pinning value site 1 to agent A leaves `2^(k-1)`
//! distinct splits, each evaluated exactly once as
//! `solve(maskA) + solve(maskB)`.
//!
//! # Parallelism
//!
//! The mask space is carved into `workers` disjoint buckets by low-order
//! residue (`m % workers`), evaluated on an explicit rayon pool.  Buckets
//! share nothing but the read-only [`DistanceMatrix`]; each folds a local
//! maximum and `try_reduce` joins them.  The reduction is a commutative,
//! associative max, so the result is independent of completion order —
//! `workers = 1` and `workers = N` must agree.  Any worker error aborts
//! the whole computation: a partial maximum is meaningless.

use rayon::prelude::*;

use tandem_core::PlanConfig;
use tandem_graph::{DistanceMatrix, SiteMask};

use crate::solver::solve;
use crate::{SearchError, SearchResult};

/// Best combined value two agents can reach, maximized over every
/// unordered partition of the value sites between them.
///
/// Validates `config` before any search work starts.
pub fn best_two_agent_schedule(dm: &DistanceMatrix, config: &PlanConfig) -> SearchResult<u64> {
    config.validate()?;
    let budget = config.budget();

    let k = dm.value_site_count();
    if k == 0 {
        return Ok(0);
    }
    let universe = dm.value_sites();
    let splits = partition_count(k);
    let workers = config.workers.min(splits as usize);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SearchError::Pool(e.to_string()))?;

    pool.install(|| {
        (0..workers as u64)
            .into_par_iter()
            .map(|bucket| -> SearchResult<u64> {
                let mut best = 0u64;
                let mut m = bucket;
                while m < splits {
                    let mine = partition_mask(m);
                    let theirs = mine.complement_within(universe);
                    let combined = solve(mine, budget, dm, config.beam_width)?
                        + solve(theirs, budget, dm, config.beam_width)?;
                    best = best.max(combined);
                    m += workers as u64;
                }
                Ok(best)
            })
            .try_reduce(|| 0, |a, b| Ok(a.max(b)))
    })
}

/// Number of distinct unordered partitions the two-agent driver evaluates
/// for `value_sites` value sites: `2^(k-1)` for `k >= 1`, zero when there
/// is nothing to assign.
#[inline]
pub fn partition_count(value_sites: usize) -> u64 {
    match value_sites {
        0 => 0,
        k => 1 << (k - 1),
    }
}

/// Single-agent convenience: one agent, the full value-site set.
pub fn best_single_agent_schedule(dm: &DistanceMatrix, config: &PlanConfig) -> SearchResult<u64> {
    config.validate()?;
    solve(dm.value_sites(), config.budget(), dm, config.beam_width)
}

/// Agent A's half of unordered partition number `m`.
///
/// Value site 1 (compact bit 1) is always A's; the free bits of `m` map to
/// compact sites 2..=k, so `m` ranges over `0..2^(k-1)`.
#[inline]
pub(crate) fn partition_mask(m: u64) -> SiteMask {
    SiteMask((m << 2) | 0b10)
}
