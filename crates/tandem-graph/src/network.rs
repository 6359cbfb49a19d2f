//! Site network representation and builders.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for adjacency.
//! Given a `SiteId s`, its neighbours occupy the slice:
//!
//! ```text
//! adj[ site_adj_start[s] .. site_adj_start[s+1] ]
//! ```
//!
//! Edges are unweighted (one hop = one tick of travel) and bidirectional.
//! Iteration over a site's neighbours is a contiguous memory scan — ideal
//! for the distance oracle's BFS inner loop.
//!
//! # Construction paths
//!
//! - [`SiteNetworkBuilder`] for programmatic construction (tests, demos).
//! - [`SiteNetwork::from_descriptions`] for [`SiteDesc`] records handed over
//!   by an external parser; this path performs all malformed-input
//!   validation (unknown links, negative rates, missing start).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use tandem_core::SiteId;

use crate::{GraphError, GraphResult};

// ── SiteDesc ──────────────────────────────────────────────────────────────────

/// One parsed site description, as produced by an external input parser.
///
/// `rate` is kept signed because it arrives from an untrusted surface;
/// [`SiteNetwork::from_descriptions`] rejects values outside `0..=u32::MAX`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteDesc {
    /// Site identifier, unique within one input.
    pub name: String,
    /// Value released per remaining tick once the site is activated.
    pub rate: i64,
    /// Names of directly adjacent sites.  Inputs list each edge from both
    /// endpoints; the builder stores exactly what is listed.
    pub links: Vec<String>,
}

// ── SiteNetwork ───────────────────────────────────────────────────────────────

/// Undirected site graph in CSR format plus per-site value rates.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`SiteNetworkBuilder`] or
/// [`SiteNetwork::from_descriptions`].  Immutable after construction.
#[derive(Debug)]
pub struct SiteNetwork {
    /// Value rate of each site.  Indexed by `SiteId`.  The start site's
    /// rate is 0 by the input invariant.
    pub rates: Vec<u32>,

    /// CSR row pointer.  Neighbours of site `s` are at
    /// `adj[site_adj_start[s] .. site_adj_start[s+1]]`.
    /// Length = `site_count + 1`.
    pub site_adj_start: Vec<u32>,

    /// Flat adjacency array, sorted by source site.
    pub adj: Vec<SiteId>,

    /// The designated start site.  Agents begin every plan here.
    pub start: SiteId,
}

impl SiteNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn site_count(&self) -> usize {
        self.rates.len()
    }

    /// Number of directed adjacency entries (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of sites with a positive value rate.
    pub fn value_site_count(&self) -> usize {
        self.rates.iter().filter(|&&r| r > 0).count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the neighbours of `site`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn neighbors(&self, site: SiteId) -> impl Iterator<Item = SiteId> + '_ {
        let lo = self.site_adj_start[site.index()] as usize;
        let hi = self.site_adj_start[site.index() + 1] as usize;
        self.adj[lo..hi].iter().copied()
    }

    /// Degree of `site` (number of adjacent sites).
    #[inline]
    pub fn degree(&self, site: SiteId) -> usize {
        let lo = self.site_adj_start[site.index()] as usize;
        let hi = self.site_adj_start[site.index() + 1] as usize;
        hi - lo
    }

    #[inline]
    pub fn rate(&self, site: SiteId) -> u32 {
        self.rates[site.index()]
    }

    // ── Validated construction from parsed input ──────────────────────────

    /// Build a network from external parser output.
    ///
    /// Sites get sequential `SiteId`s in input order.  Fails with
    /// [`GraphError::UnknownSite`] if a link names an undefined site,
    /// [`GraphError::NegativeRate`] for a negative rate,
    /// [`GraphError::RateOutOfRange`] for a rate above `u32::MAX`,
    /// [`GraphError::DuplicateSite`] for a repeated name, and
    /// [`GraphError::StartNotFound`] if `start_name` is absent.
    pub fn from_descriptions(descs: &[SiteDesc], start_name: &str) -> GraphResult<SiteNetwork> {
        let mut by_name: FxHashMap<&str, SiteId> = FxHashMap::default();
        let mut builder = SiteNetworkBuilder::with_capacity(descs.len(), descs.len() * 2);

        for desc in descs {
            if desc.rate < 0 {
                return Err(GraphError::NegativeRate(desc.name.clone(), desc.rate));
            }
            let rate = u32::try_from(desc.rate)
                .map_err(|_| GraphError::RateOutOfRange(desc.name.clone(), desc.rate))?;
            let id = builder.add_site(rate);
            if by_name.insert(desc.name.as_str(), id).is_some() {
                return Err(GraphError::DuplicateSite(desc.name.clone()));
            }
        }

        // Inputs list every undirected edge from both endpoints, so each
        // listing becomes exactly one directed CSR entry.
        for desc in descs {
            let from = by_name[desc.name.as_str()];
            for link in &desc.links {
                let to = *by_name.get(link.as_str()).ok_or_else(|| GraphError::UnknownSite {
                    site: desc.name.clone(),
                    link: link.clone(),
                })?;
                builder.link_directed(from, to);
            }
        }

        let start = *by_name
            .get(start_name)
            .ok_or_else(|| GraphError::StartNotFound(start_name.to_string()))?;
        builder.build(start)
    }
}

// ── SiteNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`SiteNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts sites and edges in any order.  `build()` sorts edges
/// by source site and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use tandem_graph::SiteNetworkBuilder;
///
/// let mut b = SiteNetworkBuilder::new();
/// let start = b.add_site(0);
/// let a = b.add_site(13);
/// b.link(start, a);
/// let net = b.build(start).unwrap();
/// assert_eq!(net.site_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct SiteNetworkBuilder {
    rates:     Vec<u32>,
    raw_edges: Vec<(SiteId, SiteId)>,
}

impl SiteNetworkBuilder {
    pub fn new() -> Self {
        Self { rates: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of sites and edges to reduce
    /// reallocations when bulk-loading parsed input.
    pub fn with_capacity(sites: usize, edges: usize) -> Self {
        Self {
            rates:     Vec::with_capacity(sites),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a site and return its `SiteId` (sequential from 0).
    pub fn add_site(&mut self, rate: u32) -> SiteId {
        let id = SiteId(self.rates.len() as u32);
        self.rates.push(rate);
        id
    }

    /// Add a **directed** adjacency entry from `from` to `to`.
    ///
    /// Used by [`SiteNetwork::from_descriptions`], where inputs already list
    /// both directions.  Programmatic callers usually want [`link`](Self::link).
    pub fn link_directed(&mut self, from: SiteId, to: SiteId) {
        self.raw_edges.push((from, to));
    }

    /// Convenience: add adjacency entries in **both directions** for an
    /// undirected edge (the common case for programmatic construction).
    pub fn link(&mut self, a: SiteId, b: SiteId) {
        self.link_directed(a, b);
        self.link_directed(b, a);
    }

    pub fn site_count(&self) -> usize { self.rates.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`SiteNetwork`] rooted at `start`.
    ///
    /// Fails with [`GraphError::InvalidStart`] if `start` was not issued by
    /// this builder.  Time complexity: O(E log E) for the edge sort.
    pub fn build(self, start: SiteId) -> GraphResult<SiteNetwork> {
        let site_count = self.rates.len();
        if start.index() >= site_count {
            return Err(GraphError::InvalidStart(start));
        }

        // Sort edges by source site for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|&(from, _)| from.0);

        let adj: Vec<SiteId> = raw.iter().map(|&(_, to)| to).collect();

        // Build CSR row pointer (site_adj_start).
        let mut site_adj_start = vec![0u32; site_count + 1];
        for &(from, _) in &raw {
            site_adj_start[from.index() + 1] += 1;
        }
        for i in 1..=site_count {
            site_adj_start[i] += site_adj_start[i - 1];
        }
        debug_assert_eq!(site_adj_start[site_count] as usize, adj.len());

        Ok(SiteNetwork {
            rates: self.rates,
            site_adj_start,
            adj,
            start,
        })
    }
}

impl Default for SiteNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
