//! `quarry`: scramble a tile puzzle and solve it from the command line.
//!
//! ```text
//! quarry --algorithm ida_star --size 4 --seed 7 --scramble-steps 10000 --hardest
//! quarry --world two-hole --tiles 3,0,2,1,4,5,6,7,8 --report run.json
//! ```
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG` to override the
//! default filter. A status line is logged every `--status-secs` seconds
//! while a solve is running.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quarry_harness::worlds::sliding_puzzle::SlidingPuzzle;
use quarry_harness::worlds::two_hole::TwoHolePuzzle;
use quarry_harness::{
    run_from, scramble, HarnessError, PuzzleWorld, RunConfig, ScrambleMode, StatusTimer,
};
use quarry_search::path::replay;
use quarry_search::{Algorithm, SearchPolicy, StatusFlag};

const DEFAULT_LOG_FILTER: &str = "quarry=info,quarry_search=info,quarry_harness=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum World {
    /// One blank, unit move cost.
    Sliding,
    /// Two blanks; the second costs twice as much to move.
    TwoHole,
}

#[derive(Debug, Parser)]
#[command(name = "quarry")]
#[command(about = "Solve scrambled tile puzzles with A*, IDA* or RBFS")]
#[command(version)]
struct Cli {
    /// Search engine: astar, ida_star or rbfs.
    #[arg(short, long, default_value = "astar")]
    algorithm: Algorithm,

    #[arg(long, value_enum, default_value_t = World::Sliding)]
    world: World,

    /// Board side length (3 or 4).
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Seed for the scrambling walk.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Length of the scrambling walk.
    #[arg(long, default_value_t = 200)]
    scramble_steps: usize,

    /// Start from the state with the largest estimate seen on the walk.
    #[arg(long)]
    hardest: bool,

    /// Explicit start layout, row-major and comma separated (skips scrambling).
    #[arg(long, value_delimiter = ',')]
    tiles: Option<Vec<u8>>,

    /// Stop after this many expansions.
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Engine loop iterations between progress polls.
    #[arg(long, default_value_t = quarry_search::policy::DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Seconds between status lines (0 disables them).
    #[arg(long, default_value_t = 5)]
    status_secs: u64,

    /// Write the JSON run report here.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print only the move list, not the board after each move.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            algorithm: self.algorithm,
            seed: self.seed,
            scramble_steps: self.scramble_steps,
            scramble_mode: if self.hardest {
                ScrambleMode::Hardest
            } else {
                ScrambleMode::EndOfWalk
            },
            policy: SearchPolicy {
                progress_interval: self.progress_interval,
                max_expansions: self.max_expansions,
                ..SearchPolicy::default()
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match (cli.world, cli.size) {
        (World::Sliding, 3) => solve_world::<SlidingPuzzle<3, 3>>(&cli),
        (World::Sliding, 4) => solve_world::<SlidingPuzzle<4, 4>>(&cli),
        (World::TwoHole, 3) => solve_world::<TwoHolePuzzle<3, 3>>(&cli),
        (World::TwoHole, 4) => solve_world::<TwoHolePuzzle<4, 4>>(&cli),
        (world, size) => bail!("unsupported board size {size} for {world:?}; expected 3 or 4"),
    }
}

fn start_state<W: PuzzleWorld>(cli: &Cli, config: &RunConfig) -> Result<W, HarnessError> {
    match &cli.tiles {
        Some(values) => {
            let state = W::from_tiles(values)?;
            if !state.is_solvable() {
                return Err(HarnessError::Unsolvable);
            }
            Ok(state)
        }
        None => Ok(scramble(
            &W::solved(),
            config.scramble_steps,
            config.scramble_mode,
            config.seed,
        )),
    }
}

fn solve_world<W: PuzzleWorld>(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.run_config();
    let initial: W = start_state(cli, &config).context("building start state")?;
    println!("start ({}):\n{initial}", initial.world_id());

    let flag = StatusFlag::new();
    let timer = (cli.status_secs > 0)
        .then(|| StatusTimer::start(flag.clone(), Duration::from_secs(cli.status_secs)));
    let report = run_from(&initial, &config, &flag, None).context("running solve")?;
    drop(timer);

    let outcome = &report.outcome;
    if outcome.is_solved() {
        let states = replay(&initial, &outcome.actions);
        for (step, (action, state)) in outcome.actions.iter().zip(states.iter().skip(1)).enumerate() {
            if cli.quiet {
                println!("{:>4}  {action}", step + 1);
            } else {
                println!("{:>4}  {action}\n{state}", step + 1);
            }
        }
    }
    println!(
        "{}: {} after {} expansions, {} moves, cost {}",
        outcome.algorithm,
        outcome.termination.as_str(),
        outcome.stats.expansions,
        outcome.actions.len(),
        outcome.cost()
    );

    if let Some(path) = &cli.report {
        report
            .write_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("report: {} ({})", path.display(), report.digest()?);
    }
    Ok(())
}
