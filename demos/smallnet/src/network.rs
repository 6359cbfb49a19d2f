//! Shared sample network definition.
//!
//! A 10-site network with 6 value-bearing sites and 4 zero-rate relay
//! sites, small enough to verify the planner's output by hand (the true
//! optima are 1651 for one agent at budget 30 and 1707 for two agents at
//! budget 26).

use tandem_graph::{GraphResult, SiteDesc, SiteNetwork};

fn desc(name: &str, rate: i64, links: &[&str]) -> SiteDesc {
    SiteDesc {
        name:  name.to_string(),
        rate,
        links: links.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build the 10-site sample network, start site "AA".
///
/// Goes through [`SiteNetwork::from_descriptions`] — the same validated
/// path an external input parser would use.
pub fn build_network() -> GraphResult<SiteNetwork> {
    let descs = [
        desc("AA", 0,  &["DD", "II", "BB"]),
        desc("BB", 13, &["CC", "AA"]),
        desc("CC", 2,  &["DD", "BB"]),
        desc("DD", 20, &["CC", "AA", "EE"]),
        desc("EE", 3,  &["FF", "DD"]),
        desc("FF", 0,  &["EE", "GG"]),
        desc("GG", 0,  &["FF", "HH"]),
        desc("HH", 22, &["GG"]),
        desc("II", 0,  &["AA", "JJ"]),
        desc("JJ", 21, &["II"]),
    ];
    SiteNetwork::from_descriptions(&descs, "AA")
}
