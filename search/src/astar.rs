//! Best-first graph search (A*) over a deduplicating registry.
//!
//! The frontier holds `(NodeId, g)` entries. Relaxing a node never removes
//! its older entries; they are recognised on pop because their recorded `g`
//! no longer matches the registry's `cost_so_far`, and skipped.

use crate::contract::{SearchAction, SearchState, INFINITE_COST};
use crate::error::SearchError;
use crate::frontier::BucketFrontier;
use crate::outcome::{SearchStats, SolveOutcome, Termination};
use crate::path::reconstruct_from_registry;
use crate::registry::{NodeId, StateRegistry};
use crate::search::{Algorithm, SearchContext};

/// Run A* from `initial`.
///
/// The returned path is cost-optimal when the heuristic is admissible.
/// Expanded nodes are reopened if a cheaper path to them turns up later, so
/// an inconsistent (but admissible) heuristic still yields optimal paths.
/// A state whose estimate is [`INFINITE_COST`] is a dead end and is never
/// queued.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the context's policy fails
/// validation.
pub fn astar<S: SearchState>(
    initial: &S,
    ctx: &SearchContext<'_, S>,
) -> Result<SolveOutcome<S::Action>, SearchError> {
    ctx.policy.validate()?;

    let mut stats = SearchStats::default();
    let mut registry: StateRegistry<S, S::Action> =
        StateRegistry::with_capacity(ctx.policy.registry_capacity);
    let mut frontier: BucketFrontier<NodeId> = BucketFrontier::new(ctx.policy.max_priority);

    tracing::debug!(algorithm = "astar", "solve started");

    let root = registry.get_or_insert(initial.clone());
    registry.meta_mut(root).cost_so_far = 0;
    if ctx.evaluator.is_goal(initial) {
        let outcome = SolveOutcome::solved(Algorithm::AStar, Vec::new(), stats);
        return Ok(finish(outcome, &registry, &frontier));
    }
    let root_h = ctx.evaluator.estimate(initial);
    if root_h == INFINITE_COST {
        return Ok(finish(
            SolveOutcome::unsolved(Algorithm::AStar, Termination::SearchExhausted, stats),
            &registry,
            &frontier,
        ));
    }
    if let Err(overflow) = frontier.insert(root, root_h, 0) {
        return Ok(finish(
            SolveOutcome::unsolved(
                Algorithm::AStar,
                Termination::PriorityOverflow { f: overflow.f },
                stats,
            ),
            &registry,
            &frontier,
        ));
    }

    let mut iteration: u64 = 0;
    let termination = loop {
        let expansions = stats.expansions;
        if let Some(stop) = ctx.checkpoint(iteration, expansions, || {
            tracing::info!(
                algorithm = "astar",
                expansions,
                frontier = frontier.len(),
                registry = registry.len(),
                "search progress"
            );
        }) {
            break stop;
        }
        iteration += 1;

        let Some((current, _f, g)) = frontier.pop_front() else {
            break Termination::SearchExhausted;
        };
        if g > registry.meta(current).cost_so_far {
            stats.stale_pops += 1;
            continue;
        }

        let state = registry.state(current).clone();
        if ctx.evaluator.is_goal(&state) {
            let actions = reconstruct_from_registry(&registry, current);
            let outcome = SolveOutcome::solved(Algorithm::AStar, actions, stats);
            return Ok(finish(outcome, &registry, &frontier));
        }

        let meta = registry.meta_mut(current);
        meta.expansions += 1;
        if meta.expansions > 1 {
            stats.reopened += 1;
        }
        stats.expansions += 1;

        match relax_successors(&state, current, g, ctx, &mut registry, &mut frontier, &mut stats)
        {
            Ok(()) => {}
            Err(f) => break Termination::PriorityOverflow { f },
        }
    };

    Ok(finish(
        SolveOutcome::unsolved(Algorithm::AStar, termination, stats),
        &registry,
        &frontier,
    ))
}

/// Generate the successors of `current` and relax each one.
///
/// Returns the offending `f` if a successor's priority is past the frontier
/// ceiling.
fn relax_successors<S: SearchState>(
    state: &S,
    current: NodeId,
    g: u32,
    ctx: &SearchContext<'_, S>,
    registry: &mut StateRegistry<S, S::Action>,
    frontier: &mut BucketFrontier<NodeId>,
    stats: &mut SearchStats,
) -> Result<(), u32> {
    // Graph search dedups on its own; reversal pruning is left to the tree searches.
    for action in state.available_actions(None) {
        let successor = state.apply(&action);
        stats.generated += 1;

        let new_cost = g.saturating_add(action.cost());
        let h = ctx.evaluator.estimate(&successor);
        if h == INFINITE_COST {
            continue;
        }
        let id = registry.get_or_insert(successor);
        let meta = registry.meta_mut(id);
        if new_cost >= meta.cost_so_far {
            continue;
        }
        meta.cost_so_far = new_cost;
        meta.parent = Some(current);
        meta.parent_action = Some(action);

        frontier
            .insert(id, new_cost.saturating_add(h), new_cost)
            .map_err(|overflow| overflow.f)?;
    }
    Ok(())
}

fn finish<S, A: SearchAction>(
    mut outcome: SolveOutcome<A>,
    registry: &StateRegistry<S, A>,
    frontier: &BucketFrontier<NodeId>,
) -> SolveOutcome<A>
where
    S: Clone + Eq + std::hash::Hash,
{
    outcome.stats.registry_size = registry.len() as u64;
    outcome.stats.frontier_high_water = frontier.high_water();
    tracing::debug!(
        algorithm = "astar",
        termination = outcome.termination.as_str(),
        expansions = outcome.stats.expansions,
        registry = outcome.stats.registry_size,
        cost = outcome.cost(),
        "solve finished"
    );
    outcome
}
