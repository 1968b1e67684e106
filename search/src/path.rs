//! Path reconstruction and replay.

use crate::contract::{SearchAction, SearchState};
use crate::registry::{NodeId, StateRegistry};

/// Walk parent links from `last` back to the root and return the producing
/// actions in forward order.
#[must_use]
pub fn reconstruct_from_registry<S, A>(registry: &StateRegistry<S, A>, last: NodeId) -> Vec<A>
where
    S: Clone + Eq + std::hash::Hash,
    A: Clone,
{
    let mut actions = Vec::new();
    let mut current = last;
    loop {
        let meta = registry.meta(current);
        let (Some(parent), Some(action)) = (meta.parent, meta.parent_action.as_ref()) else {
            break;
        };
        actions.push(action.clone());
        current = parent;
    }
    actions.reverse();
    actions
}

/// Collect the action each frame of an explicit search stack currently
/// points at, bottom frame first.
pub fn collect_frame_actions<'a, A, I>(selected: I) -> Vec<A>
where
    A: Clone + 'a,
    I: IntoIterator<Item = &'a A>,
{
    selected.into_iter().cloned().collect()
}

/// Total cost of a sequence of actions.
#[must_use]
pub fn path_cost<A: SearchAction>(actions: &[A]) -> u32 {
    actions
        .iter()
        .fold(0u32, |total, action| total.saturating_add(action.cost()))
}

/// Apply `actions` in order, returning every visited state including
/// `initial` (so the result has `actions.len() + 1` entries).
#[must_use]
pub fn replay<S: SearchState>(initial: &S, actions: &[S::Action]) -> Vec<S> {
    let mut states = Vec::with_capacity(actions.len() + 1);
    states.push(initial.clone());
    let mut current = initial.clone();
    for action in actions {
        current = current.apply(action);
        states.push(current.clone());
    }
    states
}
