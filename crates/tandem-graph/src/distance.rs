//! All-pairs hop-count oracle over the value-bearing sites.
//!
//! # Compact index space
//!
//! The beam search never stands on a zero-rate site — those are only ever
//! passed through in transit.  The oracle therefore restricts itself to the
//! **compact** site set `{start} ∪ {rate > 0}`:
//!
//! - compact index 0 = the start site,
//! - compact indices 1..=k = the value-bearing sites, ascending `SiteId`.
//!
//! A breadth-first traversal from each compact site over the *full* graph
//! (zero-rate relay sites are legal intermediate hops) records exact
//! shortest hop counts into a flat `n × n` matrix.  Complexity
//! O(n · (V + E)); V is tens of sites in practice, so precomputation is
//! negligible next to the partition search it feeds.
//!
//! # Guarantees
//!
//! Hop counts are exact, symmetric, zero on the diagonal, and satisfy the
//! triangle inequality.  A compact pair with no connecting path violates the
//! input connectivity invariant and fails construction with
//! [`GraphError::Unreachable`] instead of leaking a sentinel distance.

use std::collections::VecDeque;

use tandem_core::SiteId;

use crate::network::SiteNetwork;
use crate::{GraphError, GraphResult, SiteMask};

/// Precomputed shortest hop counts between the compact sites, plus the
/// compact-side view of their rates.  Built once, read-only afterwards;
/// shared freely across search workers (`&DistanceMatrix` is `Sync`).
pub struct DistanceMatrix {
    /// Compact site count (1 start + k value sites).
    n: usize,
    /// Row-major `n × n` hop counts.
    hops: Vec<u16>,
    /// Compact index → original `SiteId`.
    sites: Vec<SiteId>,
    /// Compact index → value rate.  `rates[0]` is 0 (the start site).
    rates: Vec<u32>,
}

impl DistanceMatrix {
    /// Run the all-pairs BFS and build the matrix.
    ///
    /// Fails with [`GraphError::TooManySites`] if the compact set exceeds
    /// [`SiteMask::CAPACITY`], and [`GraphError::Unreachable`] if any value
    /// site cannot be reached from another compact site.
    pub fn build(net: &SiteNetwork) -> GraphResult<DistanceMatrix> {
        // Compact index assignment: start first, then value sites ascending.
        let mut sites = vec![net.start];
        sites.extend(
            (0..net.site_count())
                .map(|i| SiteId(i as u32))
                .filter(|&s| s != net.start && net.rate(s) > 0),
        );
        let n = sites.len();
        if n > SiteMask::CAPACITY {
            return Err(GraphError::TooManySites(n));
        }

        // Reverse map: SiteId → compact index (usize::MAX = not compact).
        let mut compact_of = vec![usize::MAX; net.site_count()];
        for (c, &s) in sites.iter().enumerate() {
            compact_of[s.index()] = c;
        }

        const UNSEEN: u16 = u16::MAX;
        let mut hops = vec![UNSEEN; n * n];
        let mut seen = vec![false; net.site_count()];
        let mut queue: VecDeque<(SiteId, u16)> = VecDeque::new();

        for (row, &source) in sites.iter().enumerate() {
            seen.fill(false);
            queue.clear();
            queue.push_back((source, 0));
            seen[source.index()] = true;

            while let Some((site, d)) = queue.pop_front() {
                let c = compact_of[site.index()];
                if c != usize::MAX {
                    hops[row * n + c] = d;
                }
                for next in net.neighbors(site) {
                    if !seen[next.index()] {
                        seen[next.index()] = true;
                        queue.push_back((next, d + 1));
                    }
                }
            }

            // Connectivity invariant check: every compact site must have
            // been reached from this source.
            if let Some(col) = hops[row * n..(row + 1) * n].iter().position(|&h| h == UNSEEN) {
                return Err(GraphError::Unreachable { from: source, to: sites[col] });
            }
        }

        let rates = sites.iter().map(|&s| net.rate(s)).collect();
        Ok(DistanceMatrix { n, hops, sites, rates })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Compact site count (start + value sites).  Always >= 1.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of value-bearing sites (compact indices 1..=k).
    pub fn value_site_count(&self) -> usize {
        self.n - 1
    }

    // ── Lookups (compact indices) ─────────────────────────────────────────

    /// Shortest hop count between compact sites `a` and `b`.
    #[inline]
    pub fn hops(&self, a: usize, b: usize) -> u16 {
        self.hops[a * self.n + b]
    }

    /// Value rate of compact site `i`.
    #[inline]
    pub fn rate(&self, i: usize) -> u32 {
        self.rates[i]
    }

    /// Original `SiteId` of compact site `i`.
    #[inline]
    pub fn site_of(&self, i: usize) -> SiteId {
        self.sites[i]
    }

    /// Mask of all value-bearing compact sites (bits 1..=k; bit 0 clear).
    pub fn value_sites(&self) -> SiteMask {
        let mut mask = SiteMask::EMPTY;
        for i in 1..self.n {
            mask = mask.with(i);
        }
        mask
    }
}
