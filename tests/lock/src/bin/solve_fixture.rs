//! Binary that runs a fixed set of scrambled solves and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `key=value` line per world and algorithm on stdout. Engine
//! logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use quarry_harness::worlds::sliding_puzzle::EightPuzzle;
use quarry_harness::worlds::two_hole::TwoHolePuzzle;
use quarry_harness::{run_scrambled, PuzzleWorld, RunConfig, RunReport};
use quarry_search::{Algorithm, NeverReport, SearchAction};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_line<A: SearchAction>(report: &RunReport<A>) {
    let outcome = &report.outcome;
    println!(
        "world={} algorithm={} termination={} cost={} moves={} outcome_digest={} report_digest={}",
        report.world_id,
        outcome.algorithm,
        outcome.termination.as_str(),
        outcome.cost(),
        outcome.actions.len(),
        outcome.digest().expect("outcome digest"),
        report.digest().expect("report digest"),
    );
}

fn run<W: PuzzleWorld>(seed: u64, steps: usize) {
    for algorithm in Algorithm::ALL {
        let config = RunConfig {
            algorithm,
            seed,
            scramble_steps: steps,
            ..RunConfig::default()
        };
        let report = run_scrambled::<W>(&config, &NeverReport, None).expect("fixture run failed");
        print_line(&report);
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    run::<EightPuzzle>(11, 40);
    run::<TwoHolePuzzle<3, 3>>(5, 8);
}
