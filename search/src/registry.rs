//! Deduplicating store of per-state search metadata.
//!
//! Records live in an arena (`Vec`) and are addressed by [`NodeId`]. The
//! hash index maps each distinct state to its single record, so parent links
//! and frontier entries stay valid however the arena grows.

use std::collections::HashMap;

use crate::contract::INFINITE_COST;

/// Handle to a record in a [`StateRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of this record.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Best-known path data for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMeta<A> {
    /// Best known g-value; [`INFINITE_COST`] until the state is reached.
    pub cost_so_far: u32,
    /// Times this state has been expanded. More than one means it was reopened.
    pub expansions: u32,
    /// Action that produced this state on the best known path.
    pub parent_action: Option<A>,
    /// Predecessor on the best known path (`None` for the root).
    pub parent: Option<NodeId>,
}

impl<A> Default for NodeMeta<A> {
    fn default() -> Self {
        Self {
            cost_so_far: INFINITE_COST,
            expansions: 0,
            parent_action: None,
            parent: None,
        }
    }
}

#[derive(Debug)]
struct NodeRecord<S, A> {
    state: S,
    meta: NodeMeta<A>,
}

/// Arena of node records with at most one record per distinct state.
#[derive(Debug)]
pub struct StateRegistry<S, A> {
    records: Vec<NodeRecord<S, A>>,
    index: HashMap<S, NodeId>,
}

impl<S, A> StateRegistry<S, A>
where
    S: Clone + Eq + std::hash::Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Registry with room for `capacity` states before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Handle for `state`, inserting a fresh record if it is new.
    ///
    /// A fresh record has infinite cost, no parent and zero expansions.
    pub fn get_or_insert(&mut self, state: S) -> NodeId {
        if let Some(&id) = self.index.get(&state) {
            return id;
        }
        let id = NodeId(self.records.len());
        self.index.insert(state.clone(), id);
        self.records.push(NodeRecord {
            state,
            meta: NodeMeta::default(),
        });
        id
    }

    /// Handle for `state` if it has been seen.
    #[must_use]
    pub fn lookup(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// The state stored under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    #[must_use]
    pub fn state(&self, id: NodeId) -> &S {
        &self.records[id.0].state
    }

    #[must_use]
    pub fn meta(&self, id: NodeId) -> &NodeMeta<A> {
        &self.records[id.0].meta
    }

    pub fn meta_mut(&mut self, id: NodeId) -> &mut NodeMeta<A> {
        &mut self.records[id.0].meta
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<S, A> Default for StateRegistry<S, A>
where
    S: Clone + Eq + std::hash::Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
