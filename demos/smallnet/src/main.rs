//! smallnet — smallest runnable example for the tandem activation planner.
//!
//! Plans activations over a 10-site sample network two ways: one agent
//! with 30 ticks, then two agents sharing 26 ticks.  Swap in a real parsed
//! input (every added value site doubles the partition count) to see the
//! worker pool earn its keep.

mod network;

use std::time::Instant;

use anyhow::Result;

use tandem_core::PlanConfig;
use tandem_graph::DistanceMatrix;
use tandem_search::{best_single_agent_schedule, best_two_agent_schedule, partition_count};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const SINGLE_AGENT_BUDGET: i64   = 30;
const TWO_AGENT_BUDGET:    i64   = 26;
const BEAM_WIDTH:          usize = 20;
const WORKERS:             usize = 4;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallnet — tandem activation planner ===");
    println!("Beam: {BEAM_WIDTH}  |  Workers: {WORKERS}");
    println!();

    // 1. Build the site network from parsed descriptions.
    let net = build_network()?;
    println!(
        "Site network: {} sites ({} value-bearing), {} adjacency entries",
        net.site_count(),
        net.value_site_count(),
        net.edge_count()
    );

    // 2. Precompute the all-pairs hop matrix over the value sites.
    let dm = DistanceMatrix::build(&net)?;
    println!(
        "Distance matrix: {} compact sites, {} partitions to search",
        dm.len(),
        partition_count(dm.value_site_count())
    );
    println!();

    // 3. One agent, 30 ticks.
    let single_cfg = PlanConfig {
        time_budget: SINGLE_AGENT_BUDGET,
        beam_width:  BEAM_WIDTH,
        workers:     WORKERS,
    };
    let t0 = Instant::now();
    let single = best_single_agent_schedule(&dm, &single_cfg)?;
    println!(
        "One agent,  {SINGLE_AGENT_BUDGET} ticks: {single}  ({:.3} ms)",
        t0.elapsed().as_secs_f64() * 1e3
    );

    // 4. Two agents in parallel, 26 ticks each.
    let two_cfg = PlanConfig {
        time_budget: TWO_AGENT_BUDGET,
        beam_width:  BEAM_WIDTH,
        workers:     WORKERS,
    };
    let t0 = Instant::now();
    let two = best_two_agent_schedule(&dm, &two_cfg)?;
    println!(
        "Two agents, {TWO_AGENT_BUDGET} ticks: {two}  ({:.3} ms)",
        t0.elapsed().as_secs_f64() * 1e3
    );

    Ok(())
}
