//! Domain capability contract.
//!
//! The engines never look inside a state. Everything they need (legal moves,
//! transitions, the heuristic, the goal test) comes through the traits in
//! this module.

use std::fmt;
use std::hash::Hash;

/// Sentinel for "no finite cost known yet".
pub const INFINITE_COST: u32 = u32::MAX;

/// An action a domain can apply to a state.
pub trait SearchAction: Clone + Eq + fmt::Debug + fmt::Display {
    /// Non-negative cost of applying this action.
    fn cost(&self) -> u32;
}

/// A state in a caller-defined search domain.
///
/// # Contract
///
/// - `Eq` and `Hash` must agree: A* keeps one record per structurally-equal
///   state.
/// - `apply` is pure; the receiver is never mutated.
/// - `available_actions` must be deterministic for a given `(state, previous)`.
///   `previous` is the action that produced this state (if any) so a
///   reversible domain can forbid undoing it.
/// - `estimate_goal_distance` must never overestimate the true remaining cost
///   if optimal paths are expected. This is not checked.
pub trait SearchState: Clone + Eq + Hash + fmt::Debug {
    type Action: SearchAction;

    /// Enumerate the actions legal from this state.
    fn available_actions(&self, previous: Option<&Self::Action>) -> ActionSlots<Self::Action>;

    /// The state reached by applying `action`.
    fn apply(&self, action: &Self::Action) -> Self;

    /// Heuristic estimate of the remaining cost to a goal.
    fn estimate_goal_distance(&self) -> u32;

    /// Whether this state satisfies the goal.
    fn is_goal(&self) -> bool;
}

/// Fixed-capacity sequence of optional actions.
///
/// An empty slot means "this move is unavailable here". Domains declare a
/// branching bound (`MaxBranch`) up front; pushing past it is a domain bug
/// and is caught in debug builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSlots<A> {
    slots: Vec<Option<A>>,
    max_branch: usize,
}

impl<A> ActionSlots<A> {
    /// Empty container for up to `max_branch` slots.
    #[must_use]
    pub fn new(max_branch: usize) -> Self {
        Self {
            slots: Vec::with_capacity(max_branch),
            max_branch,
        }
    }

    /// Fill the next slot with `action`.
    pub fn push(&mut self, action: A) {
        self.push_slot(Some(action));
    }

    /// Fill the next slot with `action` if `available`, else leave it empty.
    pub fn push_if(&mut self, available: bool, action: A) {
        self.push_slot(available.then_some(action));
    }

    fn push_slot(&mut self, slot: Option<A>) {
        debug_assert!(
            self.slots.len() < self.max_branch,
            "more than {} actions offered",
            self.max_branch
        );
        self.slots.push(slot);
    }

    /// Declared branching bound.
    #[must_use]
    pub fn max_branch(&self) -> usize {
        self.max_branch
    }

    /// Number of filled slots.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Filled slots in enumeration order; empty slots are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.slots.iter().flatten()
    }
}

impl<A> IntoIterator for ActionSlots<A> {
    type Item = A;
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<A>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

/// Heuristic estimate and goal test supplied to an engine.
pub trait GoalEvaluator<S> {
    /// Admissible estimate of the remaining cost from `state`.
    fn estimate(&self, state: &S) -> u32;

    /// Whether `state` is a goal.
    fn is_goal(&self, state: &S) -> bool;
}

/// Evaluator that delegates to the state's own `estimate_goal_distance`
/// and `is_goal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateEvaluator;

impl<S: SearchState> GoalEvaluator<S> for StateEvaluator {
    fn estimate(&self, state: &S) -> u32 {
        state.estimate_goal_distance()
    }

    fn is_goal(&self, state: &S) -> bool {
        state.is_goal()
    }
}

/// Evaluator built from two closures, for callers that keep the heuristic
/// and goal test outside the state type.
pub struct FnEvaluator<H, G> {
    heuristic: H,
    goal_test: G,
}

impl<H, G> FnEvaluator<H, G> {
    #[must_use]
    pub fn new(heuristic: H, goal_test: G) -> Self {
        Self {
            heuristic,
            goal_test,
        }
    }
}

impl<S, H, G> GoalEvaluator<S> for FnEvaluator<H, G>
where
    H: Fn(&S) -> u32,
    G: Fn(&S) -> bool,
{
    fn estimate(&self, state: &S) -> u32 {
        (self.heuristic)(state)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }
}
