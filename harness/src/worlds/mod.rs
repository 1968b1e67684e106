//! Puzzle worlds driven by the runner, CLI, integration tests and benches.

pub mod hole_move;
pub mod route_graph;
pub mod sliding_puzzle;
pub mod two_hole;
