//! Unit tests for tandem-graph.
//!
//! All tests use hand-crafted networks so they run without any input file.

#[cfg(test)]
mod helpers {
    use tandem_core::SiteId;
    use crate::{SiteNetwork, SiteNetworkBuilder};

    /// Linear chain: start(0) — A(10) — B(5) — C(1).
    ///
    /// Hop counts: start→A 1, start→B 2, start→C 3, A→B 1, B→C 1, A→C 2.
    pub fn chain_network() -> (SiteNetwork, [SiteId; 4]) {
        let mut b = SiteNetworkBuilder::new();
        let start = b.add_site(0);
        let a = b.add_site(10);
        let bb = b.add_site(5);
        let c = b.add_site(1);
        b.link(start, a);
        b.link(a, bb);
        b.link(bb, c);
        (b.build(start).unwrap(), [start, a, bb, c])
    }

    /// Relay network: start —[x(rate 0)]— A(7), plus start — B(3) directly.
    ///
    /// `x` bears no value, so it is absent from the compact space, but the
    /// oracle must still route through it: start→A is 2 hops.
    pub fn relay_network() -> (SiteNetwork, [SiteId; 4]) {
        let mut b = SiteNetworkBuilder::new();
        let start = b.add_site(0);
        let x = b.add_site(0);
        let a = b.add_site(7);
        let bb = b.add_site(3);
        b.link(start, x);
        b.link(x, a);
        b.link(start, bb);
        (b.build(start).unwrap(), [start, x, a, bb])
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tandem_core::SiteId;
    use crate::{GraphError, SiteNetworkBuilder};

    #[test]
    fn single_link() {
        let mut b = SiteNetworkBuilder::new();
        let s = b.add_site(0);
        let a = b.add_site(13);
        b.link(s, a);
        let net = b.build(s).unwrap();
        assert_eq!(net.site_count(), 2);
        assert_eq!(net.edge_count(), 2); // bidirectional
        assert_eq!(net.value_site_count(), 1);
    }

    #[test]
    fn csr_neighbors() {
        let (net, [start, a, bb, c]) = super::helpers::chain_network();

        // Interior chain sites have two neighbours, endpoints one.
        assert_eq!(net.degree(start), 1);
        assert_eq!(net.degree(a), 2);
        assert_eq!(net.degree(bb), 2);
        assert_eq!(net.degree(c), 1);

        let a_adj: Vec<_> = net.neighbors(a).collect();
        assert!(a_adj.contains(&start));
        assert!(a_adj.contains(&bb));
    }

    #[test]
    fn directed_only_link() {
        let mut b = SiteNetworkBuilder::new();
        let s = b.add_site(0);
        let a = b.add_site(4);
        b.link_directed(s, a); // one-way
        let net = b.build(s).unwrap();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.degree(s), 1);
        assert_eq!(net.degree(a), 0); // no return entry
    }

    #[test]
    fn foreign_start_rejected() {
        let mut b = SiteNetworkBuilder::new();
        b.add_site(0);
        let result = b.build(SiteId(9));
        assert!(matches!(result, Err(GraphError::InvalidStart(_))));
    }

    #[test]
    fn rates_by_id() {
        let (net, [start, a, bb, c]) = super::helpers::chain_network();
        assert_eq!(net.rate(start), 0);
        assert_eq!(net.rate(a), 10);
        assert_eq!(net.rate(bb), 5);
        assert_eq!(net.rate(c), 1);
    }
}

// ── Parsed-input construction ─────────────────────────────────────────────────

#[cfg(test)]
mod descriptions {
    use crate::{GraphError, SiteDesc, SiteNetwork};

    fn desc(name: &str, rate: i64, links: &[&str]) -> SiteDesc {
        SiteDesc {
            name:  name.to_string(),
            rate,
            links: links.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn happy_path() {
        let descs = [
            desc("AA", 0, &["BB", "CC"]),
            desc("BB", 13, &["AA"]),
            desc("CC", 2, &["AA"]),
        ];
        let net = SiteNetwork::from_descriptions(&descs, "AA").unwrap();
        assert_eq!(net.site_count(), 3);
        assert_eq!(net.edge_count(), 4);
        assert_eq!(net.value_site_count(), 2);
        assert_eq!(net.rate(net.start), 0);
    }

    #[test]
    fn unknown_link_rejected() {
        let descs = [desc("AA", 0, &["ZZ"])];
        let err = SiteNetwork::from_descriptions(&descs, "AA").unwrap_err();
        match err {
            GraphError::UnknownSite { site, link } => {
                assert_eq!(site, "AA");
                assert_eq!(link, "ZZ");
            }
            other => panic!("expected UnknownSite, got {other}"),
        }
    }

    #[test]
    fn negative_rate_rejected() {
        let descs = [desc("AA", 0, &[]), desc("BB", -5, &[])];
        let err = SiteNetwork::from_descriptions(&descs, "AA").unwrap_err();
        assert!(matches!(err, GraphError::NegativeRate(name, -5) if name == "BB"));
    }

    #[test]
    fn oversized_rate_rejected() {
        // (1 << 32) + 5 would wrap to 5 under a plain `as u32` cast.
        let big = (1_i64 << 32) + 5;
        let descs = [desc("AA", 0, &[]), desc("BB", big, &[])];
        let err = SiteNetwork::from_descriptions(&descs, "AA").unwrap_err();
        assert!(matches!(err, GraphError::RateOutOfRange(name, r) if name == "BB" && r == big));
    }

    #[test]
    fn duplicate_name_rejected() {
        let descs = [desc("AA", 0, &[]), desc("AA", 3, &[])];
        let err = SiteNetwork::from_descriptions(&descs, "AA").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateSite(name) if name == "AA"));
    }

    #[test]
    fn missing_start_rejected() {
        let descs = [desc("BB", 13, &[])];
        let err = SiteNetwork::from_descriptions(&descs, "AA").unwrap_err();
        assert!(matches!(err, GraphError::StartNotFound(name) if name == "AA"));
    }
}

// ── Distance oracle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use crate::{DistanceMatrix, GraphError, SiteNetworkBuilder};

    #[test]
    fn chain_hop_counts() {
        let (net, _) = super::helpers::chain_network();
        let dm = DistanceMatrix::build(&net).unwrap();

        // Compact order: 0 = start, then A, B, C by ascending SiteId.
        assert_eq!(dm.len(), 4);
        assert_eq!(dm.value_site_count(), 3);
        assert_eq!(dm.hops(0, 1), 1); // start → A
        assert_eq!(dm.hops(0, 2), 2); // start → B
        assert_eq!(dm.hops(0, 3), 3); // start → C
        assert_eq!(dm.hops(1, 3), 2); // A → C
        assert_eq!(dm.rate(1), 10);
        assert_eq!(dm.rate(2), 5);
        assert_eq!(dm.rate(3), 1);
    }

    #[test]
    fn zero_rate_relays_are_traversed() {
        let (net, _) = super::helpers::relay_network();
        let dm = DistanceMatrix::build(&net).unwrap();

        // Compact space: start, A(7), B(3) — the relay x is excluded.
        assert_eq!(dm.len(), 3);
        assert_eq!(dm.hops(0, 1), 2); // start → A, through x
        assert_eq!(dm.hops(0, 2), 1); // start → B, direct
        assert_eq!(dm.hops(1, 2), 3); // A → x → start → B
    }

    #[test]
    fn symmetry_and_zero_diagonal() {
        let (net, _) = super::helpers::chain_network();
        let dm = DistanceMatrix::build(&net).unwrap();
        for a in 0..dm.len() {
            assert_eq!(dm.hops(a, a), 0);
            for b in 0..dm.len() {
                assert_eq!(dm.hops(a, b), dm.hops(b, a));
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let (net, _) = super::helpers::relay_network();
        let dm = DistanceMatrix::build(&net).unwrap();
        for a in 0..dm.len() {
            for b in 0..dm.len() {
                for c in 0..dm.len() {
                    assert!(dm.hops(a, c) <= dm.hops(a, b) + dm.hops(b, c));
                }
            }
        }
    }

    #[test]
    fn value_sites_mask() {
        let (net, _) = super::helpers::chain_network();
        let dm = DistanceMatrix::build(&net).unwrap();
        let mask = dm.value_sites();
        assert!(!mask.contains(0)); // start excluded
        assert_eq!(mask.len(), 3);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn disconnected_value_site_rejected() {
        let mut b = SiteNetworkBuilder::new();
        let s = b.add_site(0);
        let a = b.add_site(10);
        b.add_site(5); // isolated value site, no links
        b.link(s, a);
        let net = b.build(s).unwrap();
        let result = DistanceMatrix::build(&net);
        assert!(matches!(result, Err(GraphError::Unreachable { .. })));
    }

    #[test]
    fn mask_capacity_enforced() {
        // 1 start + 70 value sites on a line — exceeds the 64-bit mask.
        let mut b = SiteNetworkBuilder::new();
        let mut prev = b.add_site(0);
        let start = prev;
        for _ in 0..70 {
            let next = b.add_site(1);
            b.link(prev, next);
            prev = next;
        }
        let net = b.build(start).unwrap();
        let result = DistanceMatrix::build(&net);
        assert!(matches!(result, Err(GraphError::TooManySites(71))));
    }
}

// ── Site masks ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mask {
    use crate::SiteMask;

    #[test]
    fn with_without_contains() {
        let m = SiteMask::EMPTY.with(1).with(3);
        assert!(m.contains(1));
        assert!(m.contains(3));
        assert!(!m.contains(2));
        assert_eq!(m.without(1), SiteMask::single(3));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn complement_within_universe() {
        let universe = SiteMask::EMPTY.with(1).with(2).with(3);
        let half = SiteMask::EMPTY.with(2);
        let other = half.complement_within(universe);
        assert_eq!(other, SiteMask::EMPTY.with(1).with(3));
        assert!((half & other).is_empty());
        assert_eq!(half | other, universe);
    }

    #[test]
    fn ascending_bit_iteration() {
        let m = SiteMask::EMPTY.with(5).with(1).with(9);
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![1, 5, 9]);
        assert_eq!(m.iter().len(), 3);
    }

    #[test]
    fn minus_is_set_difference() {
        let a = SiteMask::EMPTY.with(1).with(2);
        let b = SiteMask::EMPTY.with(2).with(3);
        assert_eq!(a.minus(b), SiteMask::single(1));
    }

    // Runs under `cargo test --features serde`.
    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let m = SiteMask::EMPTY.with(1).with(5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<SiteMask>(&json).unwrap(), m);
    }
}
