//! Quarry Search: pluggable heuristic state-space search.
//!
//! Three interchangeable engines over a caller-defined domain:
//!
//! - [`astar::astar`]: best-first graph search over a deduplicating
//!   [`registry::StateRegistry`] and a bucketed [`frontier::BucketFrontier`]
//! - [`idastar::ida_star`]: iterative-deepening depth-first search on an
//!   explicit frame stack
//! - [`rbfs::rbfs`]: recursive best-first search with backed-up values, also
//!   on an explicit frame stack
//!
//! # Crate dependency graph
//!
//! ```text
//! quarry_search  ←  quarry_harness
//! (engines)         (puzzle worlds, scrambler, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchState`] / [`SearchAction`]: the domain capability contract
//! - [`GoalEvaluator`]: heuristic + goal test ([`StateEvaluator`], [`FnEvaluator`])
//! - [`SearchContext`]: evaluator, progress probe, cancel token and policy
//! - [`SearchPolicy`]: poll cadence, expansion budget, sizing
//! - [`SolveOutcome`]: actions, termination reason and counters

#![forbid(unsafe_code)]

pub mod astar;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod idastar;
pub mod outcome;
pub mod path;
pub mod policy;
pub mod probe;
pub mod rbfs;
pub mod registry;
pub mod search;

#[cfg(test)]
pub(crate) mod test_worlds;

pub use contract::{
    ActionSlots, FnEvaluator, GoalEvaluator, SearchAction, SearchState, StateEvaluator,
    INFINITE_COST,
};
pub use error::SearchError;
pub use outcome::{SearchStats, SolveOutcome, Termination};
pub use policy::SearchPolicy;
pub use probe::{CancelToken, NeverReport, ProgressProbe, StatusFlag};
pub use search::{solve, solve_actions, Algorithm, SearchContext};
