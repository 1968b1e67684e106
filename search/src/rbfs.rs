//! Recursive best-first search, driven by an explicit frame stack.
//!
//! Each frame is one level of the classic recursion: the node's children
//! with their backed-up values `F`, and the bound `B` the level was entered
//! with. Descending pushes a frame; returning pops it and writes the child's
//! best `F` into the parent's selected child. Memory stays linear in depth.

use std::cmp::Ordering;

use crate::contract::{GoalEvaluator, SearchAction, SearchState, INFINITE_COST};
use crate::error::SearchError;
use crate::outcome::{SearchStats, SolveOutcome, Termination};
use crate::path::collect_frame_actions;
use crate::search::{Algorithm, SearchContext};

struct Child<S: SearchState> {
    action: S::Action,
    state: S,
    g: u32,
    f: u32,
    /// Backed-up value: the best `f` known to lie beneath this child.
    backed_up: u32,
}

struct Frame<S: SearchState> {
    /// `children[0]` is the best child once the frame has been sorted.
    children: Vec<Child<S>>,
    bound: u32,
}

/// Ascending backed-up value; ties go to the deeper child.
fn by_backed_up<S: SearchState>(a: &Child<S>, b: &Child<S>) -> Ordering {
    a.backed_up.cmp(&b.backed_up).then(b.g.cmp(&a.g))
}

impl<S: SearchState> Frame<S> {
    /// Generate the children of a node with values `(g, f, backed_up)`.
    ///
    /// A node whose backed-up value exceeds its static `f` has been explored
    /// before; its children inherit that value as a floor.
    #[allow(clippy::too_many_arguments)]
    fn expand(
        state: &S,
        previous: Option<&S::Action>,
        g: u32,
        f: u32,
        backed_up: u32,
        bound: u32,
        evaluator: &dyn GoalEvaluator<S>,
        stats: &mut SearchStats,
    ) -> Self {
        let revisited = f < backed_up;
        let children: Vec<Child<S>> = state
            .available_actions(previous)
            .into_iter()
            .map(|action| {
                let child = state.apply(&action);
                let child_g = g.saturating_add(action.cost());
                let child_f = child_g.saturating_add(evaluator.estimate(&child));
                Child {
                    action,
                    state: child,
                    g: child_g,
                    f: child_f,
                    backed_up: if revisited {
                        backed_up.max(child_f)
                    } else {
                        child_f
                    },
                }
            })
            .collect();

        stats.expansions += 1;
        stats.generated += children.len() as u64;
        Self { children, bound }
    }

    fn best_backed_up(&self) -> u32 {
        self.children.first().map_or(INFINITE_COST, |c| c.backed_up)
    }

    fn second_backed_up(&self) -> u32 {
        self.children.get(1).map_or(INFINITE_COST, |c| c.backed_up)
    }

    fn best_action(&self) -> &S::Action {
        &self.children[0].action
    }
}

/// Run RBFS from `initial`.
///
/// Cost-optimal under an admissible heuristic. Like IDA* this is a tree
/// search: no states are remembered across branches.
///
/// Termination needs every cycle to have positive cost: on a zero-cost cycle
/// the search only stops at the expansion budget. A child whose value is
/// [`INFINITE_COST`] is a dead end, even under an unbounded frame.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the context's policy fails
/// validation.
pub fn rbfs<S: SearchState>(
    initial: &S,
    ctx: &SearchContext<'_, S>,
) -> Result<SolveOutcome<S::Action>, SearchError> {
    ctx.policy.validate()?;
    let mut stats = SearchStats::default();
    tracing::debug!(algorithm = "rbfs", "solve started");

    if ctx.evaluator.is_goal(initial) {
        return Ok(finish(SolveOutcome::solved(
            Algorithm::Rbfs,
            Vec::new(),
            stats,
        )));
    }

    let f = ctx.evaluator.estimate(initial);
    let mut stack = vec![Frame::expand(
        initial,
        None,
        0,
        f,
        f,
        f,
        ctx.evaluator,
        &mut stats,
    )];
    stats.max_depth = 1;

    let mut iteration: u64 = 0;
    let termination = loop {
        let (expansions, depth) = (stats.expansions, stack.len());
        let root_bound = stack.first().map_or(INFINITE_COST, |root| root.bound);
        if let Some(stop) = ctx.checkpoint(iteration, expansions, || {
            tracing::info!(
                algorithm = "rbfs",
                expansions,
                depth,
                bound = root_bound,
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
        top.children.sort_by(by_backed_up);
        let best = top.best_backed_up();

        if best > top.bound || best == INFINITE_COST {
            if at_root {
                if best == INFINITE_COST {
                    break Termination::SearchExhausted;
                }
                top.bound = best;
                stats.iterations += 1;
                tracing::debug!(algorithm = "rbfs", bound = best, "raising bound");
            } else {
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.children[0].backed_up = best;
                }
            }
            continue;
        }

        let Some(child) = top.children.first() else {
            break Termination::SearchExhausted;
        };
        if ctx.evaluator.is_goal(&child.state) {
            let actions = collect_frame_actions(stack.iter().map(Frame::best_action));
            stats.final_bound = stack.first().map(|root| root.bound);
            return Ok(finish(SolveOutcome::solved(
                Algorithm::Rbfs,
                actions,
                stats,
            )));
        }

        let child_bound = top.bound.min(top.second_backed_up());
        let frame = Frame::expand(
            &child.state,
            Some(&child.action),
            child.g,
            child.f,
            child.backed_up,
            child_bound,
            ctx.evaluator,
            &mut stats,
        );
        stack.push(frame);
        stats.max_depth = stats.max_depth.max(stack.len() as u64);
    };

    stats.final_bound = stack.first().map(|root| root.bound);
    Ok(finish(SolveOutcome::unsolved(
        Algorithm::Rbfs,
        termination,
        stats,
    )))
}

fn finish<A: SearchAction>(outcome: SolveOutcome<A>) -> SolveOutcome<A> {
    tracing::debug!(
        algorithm = "rbfs",
        termination = outcome.termination.as_str(),
        expansions = outcome.stats.expansions,
        iterations = outcome.stats.iterations,
        cost = outcome.cost(),
        "solve finished"
    );
    outcome
}
