//! Iterative-deepening A* on an explicit frame stack.
//!
//! Depth-first search bounded by `f <= limit`. When the root frame runs out
//! of successors the smallest `f` that was rejected becomes the next limit.
//! The stack replaces native recursion, so search depth is bounded by heap
//! memory rather than the call stack, and the loop can be polled and
//! cancelled between steps.

use crate::contract::{GoalEvaluator, SearchAction, SearchState, INFINITE_COST};
use crate::error::SearchError;
use crate::outcome::{SearchStats, SolveOutcome, Termination};
use crate::path::collect_frame_actions;
use crate::search::{Algorithm, SearchContext};

struct Successor<S: SearchState> {
    action: S::Action,
    state: S,
    g: u32,
    f: u32,
}

struct Frame<S: SearchState> {
    /// Sorted by ascending `f`, then shallower `g`.
    successors: Vec<Successor<S>>,
    /// Index of the next successor to try. The selected one is `next - 1`.
    next: usize,
    /// Smallest `f` rejected below this frame.
    limit: u32,
}

impl<S: SearchState> Frame<S> {
    fn expand(
        state: &S,
        previous: Option<&S::Action>,
        g: u32,
        evaluator: &dyn GoalEvaluator<S>,
        stats: &mut SearchStats,
    ) -> Self {
        let mut successors: Vec<Successor<S>> = state
            .available_actions(previous)
            .into_iter()
            .map(|action| {
                let child = state.apply(&action);
                let child_g = g.saturating_add(action.cost());
                let f = child_g.saturating_add(evaluator.estimate(&child));
                Successor {
                    action,
                    state: child,
                    g: child_g,
                    f,
                }
            })
            .collect();
        successors.sort_by_key(|s| (s.f, s.g));

        stats.expansions += 1;
        stats.generated += successors.len() as u64;
        Self {
            successors,
            next: 0,
            limit: INFINITE_COST,
        }
    }

    fn selected_action(&self) -> &S::Action {
        &self.successors[self.next - 1].action
    }
}

/// Run IDA* from `initial`.
///
/// Cost-optimal under an admissible heuristic. No transposition table is
/// kept, so the same state may be revisited along different branches; the
/// domain's reversal pruning (through the `previous` action) is the only
/// duplicate control.
///
/// Termination needs every cycle to have positive cost: on a zero-cost cycle
/// the search only stops at the expansion budget. A state estimated at
/// [`INFINITE_COST`] is treated as a dead end.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the context's policy fails
/// validation.
pub fn ida_star<S: SearchState>(
    initial: &S,
    ctx: &SearchContext<'_, S>,
) -> Result<SolveOutcome<S::Action>, SearchError> {
    ctx.policy.validate()?;
    let mut stats = SearchStats::default();
    tracing::debug!(algorithm = "ida_star", "solve started");

    if ctx.evaluator.is_goal(initial) {
        return Ok(finish(SolveOutcome::solved(
            Algorithm::IdaStar,
            Vec::new(),
            stats,
        )));
    }

    let mut limit = ctx.evaluator.estimate(initial);
    if limit == INFINITE_COST {
        return Ok(finish(SolveOutcome::unsolved(
            Algorithm::IdaStar,
            Termination::SearchExhausted,
            stats,
        )));
    }
    let mut stack = vec![Frame::expand(initial, None, 0, ctx.evaluator, &mut stats)];
    stats.max_depth = 1;

    let mut iteration: u64 = 0;
    let termination = loop {
        let (expansions, depth) = (stats.expansions, stack.len());
        if let Some(stop) = ctx.checkpoint(iteration, expansions, || {
            tracing::info!(
                algorithm = "ida_star",
                expansions,
                depth,
                bound = limit,
                "search progress"
            );
        }) {
            break stop;
        }
        iteration += 1;

        let at_root = stack.len() == 1;
        let Some(top) = stack.last_mut() else {
            break Termination::SearchExhausted;
        };

        if top.next == top.successors.len() {
            if at_root {
                let next_limit = top.limit;
                if next_limit == INFINITE_COST || next_limit <= limit {
                    break Termination::SearchExhausted;
                }
                limit = next_limit;
                top.next = 0;
                top.limit = INFINITE_COST;
                stats.iterations += 1;
                tracing::debug!(algorithm = "ida_star", bound = limit, "raising bound");
            } else {
                let frame_limit = top.limit;
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.limit = parent.limit.min(frame_limit);
                }
            }
            continue;
        }

        let index = top.next;
        top.next += 1;
        let successor = &top.successors[index];

        if successor.f == INFINITE_COST {
            continue;
        }
        if successor.f > limit {
            top.limit = top.limit.min(successor.f);
            continue;
        }

        if ctx.evaluator.is_goal(&successor.state) {
            let actions = collect_frame_actions(stack.iter().map(Frame::selected_action));
            stats.final_bound = Some(limit);
            return Ok(finish(SolveOutcome::solved(
                Algorithm::IdaStar,
                actions,
                stats,
            )));
        }

        let child = Frame::expand(
            &successor.state,
            Some(&successor.action),
            successor.g,
            ctx.evaluator,
            &mut stats,
        );
        stack.push(child);
        stats.max_depth = stats.max_depth.max(stack.len() as u64);
    };

    stats.final_bound = Some(limit);
    Ok(finish(SolveOutcome::unsolved(
        Algorithm::IdaStar,
        termination,
        stats,
    )))
}

fn finish<A: SearchAction>(outcome: SolveOutcome<A>) -> SolveOutcome<A> {
    tracing::debug!(
        algorithm = "ida_star",
        termination = outcome.termination.as_str(),
        expansions = outcome.stats.expansions,
        iterations = outcome.stats.iterations,
        cost = outcome.cost(),
        "solve finished"
    );
    outcome
}
