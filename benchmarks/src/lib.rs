//! Shared helpers for quarry benchmark suites.

use quarry_harness::worlds::sliding_puzzle::{EightPuzzle, FifteenPuzzle};
use quarry_harness::worlds::two_hole::TwoHolePuzzle;
use quarry_harness::{scramble, PuzzleWorld, ScrambleMode};
use quarry_search::{solve, Algorithm, SearchContext, SearchState, SolveOutcome, StateEvaluator};

/// A named start state.
pub struct Regime<S> {
    pub name: &'static str,
    pub start: S,
}

fn regime<S: PuzzleWorld>(name: &'static str, steps: usize, seed: u64) -> Regime<S> {
    Regime {
        name,
        start: scramble(&S::solved(), steps, ScrambleMode::EndOfWalk, seed),
    }
}

/// 3x3 instances from shallow to deep.
#[must_use]
pub fn eight_regimes() -> Vec<Regime<EightPuzzle>> {
    vec![
        regime("walk_10", 10, 1),
        regime("walk_30", 30, 2),
        regime("walk_200", 200, 3),
    ]
}

/// 4x4 instances shallow enough for every engine.
#[must_use]
pub fn fifteen_regimes() -> Vec<Regime<FifteenPuzzle>> {
    vec![regime("walk_20", 20, 4), regime("walk_40", 40, 5)]
}

/// Weighted two-blank 3x3 instances.
#[must_use]
pub fn two_hole_regimes() -> Vec<Regime<TwoHolePuzzle<3, 3>>> {
    vec![regime("walk_8", 8, 6), regime("walk_14", 14, 7)]
}

/// Solve with the state's own heuristic and the default policy.
///
/// # Panics
///
/// Panics if the default policy is rejected. Benchmark setup failures are fatal.
#[must_use]
pub fn solve_once<S: SearchState>(algorithm: Algorithm, start: &S) -> SolveOutcome<S::Action> {
    let ctx: SearchContext<'_, S> = SearchContext::new(&StateEvaluator);
    solve(algorithm, start, &ctx).expect("default policy is valid")
}
