//! Fixed start states and one-call solve helpers.
//!
//! Every fixture is built from scripted moves or fixed seeds, so lock tests
//! see the same instances on every machine.

use quarry_harness::worlds::hole_move::HoleMove;
use quarry_harness::worlds::route_graph::RouteGraph;
use quarry_harness::worlds::sliding_puzzle::EightPuzzle;
use quarry_harness::PuzzleWorld;
use quarry_search::{solve, Algorithm, SearchContext, SearchState, SolveOutcome, StateEvaluator};

/// Solved 3x3 board with the blank moved along `moves`.
///
/// # Panics
///
/// Panics if a move leaves the board. Fixture scripts are fixed.
#[must_use]
pub fn scripted_eight(moves: &[HoleMove]) -> EightPuzzle {
    moves.iter().fold(EightPuzzle::solved(), |board, m| {
        board
            .try_move(*m)
            .unwrap_or_else(|| panic!("scripted move {m} leaves the board"))
    })
}

/// Solved 3x3 board with tiles 1 and 2 swapped: the other parity class.
///
/// # Panics
///
/// Panics if the fixed layout is rejected.
#[must_use]
pub fn unsolvable_eight() -> EightPuzzle {
    EightPuzzle::from_tiles(&[0, 2, 1, 3, 4, 5, 6, 7, 8]).expect("fixed layout is a permutation")
}

/// Solve with the state's own heuristic and the default policy.
///
/// # Panics
///
/// Panics if the default policy is rejected.
#[must_use]
pub fn solve_default<S: SearchState>(algorithm: Algorithm, start: &S) -> SolveOutcome<S::Action> {
    let ctx: SearchContext<'_, S> = SearchContext::new(&StateEvaluator);
    solve(algorithm, start, &ctx).expect("default policy is valid")
}

/// Six-node road map with a cheap long route and an expensive short one.
///
/// ```text
/// 0 -1- 1 -1- 2 -1- 3
/// |                 |
/// 9                 1
/// |                 |
/// 4 ------1-------- 5 (goal)
/// ```
///
/// Cheapest 0 → 5 costs 4 (0-1-2-3-5).
///
/// # Panics
///
/// Panics if the fixed edges are rejected.
#[must_use]
pub fn road_map() -> RouteGraph {
    let mut graph = RouteGraph::new(6);
    graph
        .add_road(0, 1, 1)
        .and_then(|g| g.add_road(1, 2, 1))
        .and_then(|g| g.add_road(2, 3, 1))
        .and_then(|g| g.add_road(3, 5, 1))
        .and_then(|g| g.add_road(0, 4, 9))
        .and_then(|g| g.add_road(4, 5, 1))
        .and_then(|g| g.set_goal(5))
        .expect("fixed road map is well formed");
    graph
}

/// Finite acyclic graph in which the goal cannot be reached.
///
/// # Panics
///
/// Panics if the fixed edges are rejected.
#[must_use]
pub fn cut_off_map() -> RouteGraph {
    let mut graph = RouteGraph::new(5);
    graph
        .add_edge(0, 1, 1)
        .and_then(|g| g.add_edge(0, 2, 2))
        .and_then(|g| g.add_edge(1, 3, 1))
        .and_then(|g| g.add_edge(2, 3, 1))
        .and_then(|g| g.set_goal(4))
        .expect("fixed cut-off map is well formed");
    graph
}

/// Road map with a branch that cannot reach the goal.
///
/// ```text
/// 0 -1-> 1 -1-> 2
/// |
/// 2
/// v
/// 3 -1-> 4 (goal)
/// ```
///
/// Exact costs to the goal are `[3, inf, inf, 1, 0]`.
///
/// # Panics
///
/// Panics if the fixed edges are rejected.
#[must_use]
pub fn dead_branch_map() -> RouteGraph {
    let mut graph = RouteGraph::new(5);
    graph
        .add_edge(0, 1, 1)
        .and_then(|g| g.add_edge(1, 2, 1))
        .and_then(|g| g.add_edge(0, 3, 2))
        .and_then(|g| g.add_edge(3, 4, 1))
        .and_then(|g| g.set_goal(4))
        .expect("fixed dead-branch map is well formed");
    graph
}

/// Acyclic graph whose cheapest route uses free edges.
/// Cheapest 0 → 3 costs 1 (0-1-2-3); the direct edge costs 2.
///
/// # Panics
///
/// Panics if the fixed edges are rejected.
#[must_use]
pub fn free_edge_chain() -> RouteGraph {
    let mut graph = RouteGraph::new(4);
    graph
        .add_edge(0, 1, 0)
        .and_then(|g| g.add_edge(1, 2, 0))
        .and_then(|g| g.add_edge(2, 3, 1))
        .and_then(|g| g.add_edge(0, 3, 2))
        .and_then(|g| g.set_goal(3))
        .expect("fixed free-edge chain is well formed");
    graph
}

/// Free two-way road between 0 and 1, goal 2 one step from 0.
///
/// # Panics
///
/// Panics if the fixed edges are rejected.
#[must_use]
pub fn free_loop_map() -> RouteGraph {
    let mut graph = RouteGraph::new(3);
    graph
        .add_road(0, 1, 0)
        .and_then(|g| g.add_edge(0, 2, 1))
        .and_then(|g| g.set_goal(2))
        .expect("fixed free-loop map is well formed");
    graph
}
