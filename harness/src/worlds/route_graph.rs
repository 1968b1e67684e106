//! Weighted directed graph world.
//!
//! Unlike the tile puzzles this world is finite and may have no path to its
//! goal, so every engine can be driven to exhaustion on it. Heuristic values
//! live in a per-node table; callers can also bypass it with a
//! [`quarry_search::FnEvaluator`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::{Hash, Hasher};

use quarry_search::{ActionSlots, SearchAction, SearchState, INFINITE_COST};

use crate::error::HarnessError;

/// Traverse one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hop {
    pub to: u32,
    pub cost: u32,
}

impl SearchAction for Hop {
    fn cost(&self) -> u32 {
        self.cost
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "->{}", self.to)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    edges: Vec<Vec<Hop>>,
    estimates: Vec<u32>,
    goal: Option<u32>,
    /// Largest out-degree, kept current by `add_edge`.
    max_out_degree: usize,
}

impl RouteGraph {
    /// Graph with `node_count` nodes, no edges, zero estimates and no goal.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); node_count],
            estimates: vec![0; node_count],
            goal: None,
            max_out_degree: 0,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn check(&self, node: u32) -> Result<usize, HarnessError> {
        let index = node as usize;
        if index < self.edges.len() {
            Ok(index)
        } else {
            Err(HarnessError::UnknownNode {
                node,
                node_count: self.edges.len(),
            })
        }
    }

    /// Add a one-way edge.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownNode`] if either endpoint is missing.
    pub fn add_edge(&mut self, from: u32, to: u32, cost: u32) -> Result<&mut Self, HarnessError> {
        let from = self.check(from)?;
        self.check(to)?;
        self.edges[from].push(Hop { to, cost });
        self.max_out_degree = self.max_out_degree.max(self.edges[from].len());
        Ok(self)
    }

    /// Add edges in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownNode`] if either endpoint is missing.
    pub fn add_road(&mut self, a: u32, b: u32, cost: u32) -> Result<&mut Self, HarnessError> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownNode`] if `goal` is missing.
    pub fn set_goal(&mut self, goal: u32) -> Result<&mut Self, HarnessError> {
        self.check(goal)?;
        self.goal = Some(goal);
        Ok(self)
    }

    /// Replace the estimate table.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::WrongTileCount`] if the table length does not
    /// match the node count.
    pub fn set_estimates(&mut self, estimates: Vec<u32>) -> Result<&mut Self, HarnessError> {
        if estimates.len() != self.edges.len() {
            return Err(HarnessError::WrongTileCount {
                expected: self.edges.len(),
                actual: estimates.len(),
            });
        }
        self.estimates = estimates;
        Ok(self)
    }

    #[must_use]
    pub fn goal(&self) -> Option<u32> {
        self.goal
    }

    #[must_use]
    pub fn max_out_degree(&self) -> usize {
        self.max_out_degree
    }

    /// Handle on node `id`, usable as a search state.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownNode`] if `id` is missing.
    pub fn node(&self, id: u32) -> Result<RouteNode<'_>, HarnessError> {
        self.check(id)?;
        Ok(RouteNode { graph: self, id })
    }

    /// Exact cheapest cost from every node to `goal` ([`INFINITE_COST`] if
    /// unreachable). A perfect heuristic table for tests and benchmarks.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownNode`] if `goal` is missing.
    pub fn exact_costs_to(&self, goal: u32) -> Result<Vec<u32>, HarnessError> {
        let goal = self.check(goal)?;
        let mut incoming: Vec<Vec<(usize, u32)>> = vec![Vec::new(); self.edges.len()];
        for (from, hops) in self.edges.iter().enumerate() {
            for hop in hops {
                incoming[hop.to as usize].push((from, hop.cost));
            }
        }

        let mut best = vec![INFINITE_COST; self.edges.len()];
        let mut heap = BinaryHeap::new();
        best[goal] = 0;
        heap.push(Reverse((0u32, goal)));
        while let Some(Reverse((cost, node))) = heap.pop() {
            if cost > best[node] {
                continue;
            }
            for &(from, edge_cost) in &incoming[node] {
                let through = cost.saturating_add(edge_cost);
                if through < best[from] {
                    best[from] = through;
                    heap.push(Reverse((through, from)));
                }
            }
        }
        Ok(best)
    }
}

/// A node of a [`RouteGraph`]. Identity is the node id alone.
#[derive(Clone, Copy)]
pub struct RouteNode<'g> {
    graph: &'g RouteGraph,
    id: u32,
}

impl RouteNode<'_> {
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl PartialEq for RouteNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RouteNode<'_> {}

impl Hash for RouteNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for RouteNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteNode({})", self.id)
    }
}

impl SearchState for RouteNode<'_> {
    type Action = Hop;

    fn available_actions(&self, _previous: Option<&Hop>) -> ActionSlots<Hop> {
        let hops = &self.graph.edges[self.id as usize];
        let mut slots = ActionSlots::new(self.graph.max_out_degree);
        for hop in hops {
            slots.push(*hop);
        }
        slots
    }

    fn apply(&self, action: &Hop) -> Self {
        Self {
            graph: self.graph,
            id: action.to,
        }
    }

    fn estimate_goal_distance(&self) -> u32 {
        self.graph.estimates[self.id as usize]
    }

    fn is_goal(&self) -> bool {
        self.graph.goal == Some(self.id)
    }
}
