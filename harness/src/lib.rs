//! Quarry Harness: puzzle worlds and run orchestration for the engines.
//!
//! The harness builds a start state (explicitly or by a seeded scramble),
//! hands it to an engine from `quarry_search`, replays the answer to verify
//! it, and packages the result as a deterministic JSON report.
//!
//! The harness does NOT implement search; worlds provide domain rules only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod runner;
pub mod scramble;
pub mod status;
pub mod worlds;

pub use contract::PuzzleWorld;
pub use error::HarnessError;
pub use runner::{run_from, run_scrambled, RunConfig, RunReport};
pub use scramble::{scramble, ScrambleMode};
pub use status::StatusTimer;
