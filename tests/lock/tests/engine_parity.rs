//! Lock tests: every engine returns a cost-optimal, replayable solution,
//! and all three agree on that cost.

use lock_tests::fixtures::{
    cut_off_map, dead_branch_map, free_edge_chain, road_map, scripted_eight, solve_default,
};
use quarry_harness::worlds::hole_move::HoleMove;
use quarry_harness::worlds::route_graph::RouteNode;
use quarry_harness::worlds::sliding_puzzle::EightPuzzle;
use quarry_harness::worlds::two_hole::TwoHolePuzzle;
use quarry_harness::{scramble, PuzzleWorld, ScrambleMode};
use quarry_search::path::{path_cost, replay};
use quarry_search::{
    solve, Algorithm, FnEvaluator, SearchContext, SearchState, Termination, INFINITE_COST,
};

fn assert_reaches_goal<S: SearchState>(start: &S, actions: &[S::Action]) {
    let states = replay(start, actions);
    assert_eq!(states.len(), actions.len() + 1);
    assert!(states.last().is_some_and(|s| s.is_goal()));
}

// ---------------------------------------------------------------------------
// Scripted sliding puzzles
// ---------------------------------------------------------------------------

#[test]
fn one_move_from_solved_is_undone_by_every_engine() {
    let start = scripted_eight(&[HoleMove::Right]);
    for algorithm in Algorithm::ALL {
        let outcome = solve_default(algorithm, &start);
        assert_eq!(outcome.termination, Termination::GoalReached, "{algorithm}");
        assert_eq!(outcome.actions, vec![HoleMove::Left], "{algorithm}");
        assert_eq!(outcome.cost(), 1, "{algorithm}");
    }
}

#[test]
fn four_move_scramble_takes_four_moves() {
    let start = scripted_eight(&[
        HoleMove::Down,
        HoleMove::Right,
        HoleMove::Down,
        HoleMove::Right,
    ]);
    assert_eq!(start.estimate_goal_distance(), 4);
    for algorithm in Algorithm::ALL {
        let outcome = solve_default(algorithm, &start);
        assert!(outcome.is_solved(), "{algorithm}");
        assert_eq!(outcome.actions.len(), 4, "{algorithm}");
        assert_reaches_goal(&start, &outcome.actions);
    }
}

// ---------------------------------------------------------------------------
// Seeded scrambles
// ---------------------------------------------------------------------------

#[test]
fn engines_agree_on_optimal_cost_for_seeded_eight_puzzles() {
    for seed in 0..6 {
        let start = scramble(&EightPuzzle::solved(), 24, ScrambleMode::EndOfWalk, seed);
        let costs: Vec<u32> = Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                let outcome = solve_default(algorithm, &start);
                assert!(outcome.is_solved(), "{algorithm} seed {seed}");
                assert_reaches_goal(&start, &outcome.actions);
                outcome.cost()
            })
            .collect();
        assert!(
            costs.windows(2).all(|w| w[0] == w[1]),
            "seed {seed}: costs differ {costs:?}"
        );
        assert!(costs[0] >= start.estimate_goal_distance());
    }
}

#[test]
fn engines_agree_on_weighted_two_hole_cost() {
    for seed in 0..3 {
        let start = scramble(&TwoHolePuzzle::<3, 3>::solved(), 10, ScrambleMode::EndOfWalk, seed);
        let outcomes: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&algorithm| solve_default(algorithm, &start))
            .collect();
        for outcome in &outcomes {
            assert!(outcome.is_solved(), "{} seed {seed}", outcome.algorithm);
            assert_reaches_goal(&start, &outcome.actions);
            assert_eq!(outcome.cost(), outcomes[0].cost(), "{} seed {seed}", outcome.algorithm);
            assert_eq!(outcome.cost(), path_cost(&outcome.actions));
        }
    }
}

// ---------------------------------------------------------------------------
// Caller-supplied evaluator
// ---------------------------------------------------------------------------

#[test]
fn fn_evaluator_overrides_state_heuristic() {
    let graph = road_map();
    let exact = graph.exact_costs_to(5).unwrap();
    let evaluator = FnEvaluator::new(
        |node: &RouteNode<'_>| exact[node.id() as usize],
        |node: &RouteNode<'_>| node.id() == 5,
    );
    let start = graph.node(0).unwrap();
    for algorithm in Algorithm::ALL {
        let ctx: SearchContext<'_, RouteNode<'_>> = SearchContext::new(&evaluator);
        let outcome = solve(algorithm, &start, &ctx).unwrap();
        assert!(outcome.is_solved(), "{algorithm}");
        assert_eq!(outcome.cost(), 4, "{algorithm}");
        let hops: Vec<u32> = outcome.actions.iter().map(|hop| hop.to).collect();
        assert_eq!(hops, vec![1, 2, 3, 5], "{algorithm}");
    }
}

#[test]
fn zero_heuristic_still_finds_cheapest_route() {
    let graph = road_map();
    let start = graph.node(0).unwrap();
    for algorithm in Algorithm::ALL {
        let outcome = solve_default(algorithm, &start);
        assert_eq!(outcome.cost(), 4, "{algorithm}");
    }
}

#[test]
fn exact_cost_table_with_unreachable_nodes() {
    let graph = dead_branch_map();
    let exact = graph.exact_costs_to(4).unwrap();
    assert_eq!(exact, vec![3, INFINITE_COST, INFINITE_COST, 1, 0]);
    let evaluator = FnEvaluator::new(
        |node: &RouteNode<'_>| exact[node.id() as usize],
        |node: &RouteNode<'_>| node.id() == 4,
    );
    let start = graph.node(0).unwrap();
    for algorithm in Algorithm::ALL {
        let ctx: SearchContext<'_, RouteNode<'_>> = SearchContext::new(&evaluator);
        let outcome = solve(algorithm, &start, &ctx).unwrap();
        assert!(outcome.is_solved(), "{algorithm}");
        let hops: Vec<u32> = outcome.actions.iter().map(|hop| hop.to).collect();
        assert_eq!(hops, vec![3, 4], "{algorithm}");
    }
}

#[test]
fn exact_cost_table_for_an_unreachable_goal_exhausts() {
    let graph = cut_off_map();
    let exact = graph.exact_costs_to(4).unwrap();
    assert!(exact[..4].iter().all(|&cost| cost == INFINITE_COST));
    let evaluator = FnEvaluator::new(
        |node: &RouteNode<'_>| exact[node.id() as usize],
        |node: &RouteNode<'_>| node.id() == 4,
    );
    let start = graph.node(0).unwrap();
    for algorithm in Algorithm::ALL {
        let ctx: SearchContext<'_, RouteNode<'_>> = SearchContext::new(&evaluator);
        let outcome = solve(algorithm, &start, &ctx).unwrap();
        assert_eq!(outcome.termination, Termination::SearchExhausted, "{algorithm}");
        assert!(outcome.actions.is_empty(), "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// Zero-cost actions
// ---------------------------------------------------------------------------

#[test]
fn free_edges_on_an_acyclic_graph() {
    let graph = free_edge_chain();
    let start = graph.node(0).unwrap();
    for algorithm in Algorithm::ALL {
        let outcome = solve_default(algorithm, &start);
        assert!(outcome.is_solved(), "{algorithm}");
        assert_eq!(outcome.cost(), 1, "{algorithm}");
        let hops: Vec<u32> = outcome.actions.iter().map(|hop| hop.to).collect();
        assert_eq!(hops, vec![1, 2, 3], "{algorithm}");
    }
}
