//! Small explicit worlds for unit tests.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::contract::{ActionSlots, SearchAction, SearchState, INFINITE_COST};

/// Edge traversal to node `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub to: u32,
    pub cost: u32,
}

impl Step {
    pub fn new(to: u32, cost: u32) -> Self {
        Self { to, cost }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "->{}", self.to)
    }
}

impl SearchAction for Step {
    fn cost(&self) -> u32 {
        self.cost
    }
}

/// Static weighted digraph with a per-node heuristic.
#[derive(Debug)]
pub struct TestGraph {
    /// `(to, cost)` edges per node.
    pub edges: &'static [&'static [(u32, u32)]],
    pub heuristic: &'static [u32],
    pub goal: Option<u32>,
}

/// Cheapest route 0 -> 1 -> 2 -> 3 costs 3; the direct-looking routes cost 5 and 6.
pub static DIAMOND: TestGraph = TestGraph {
    edges: &[&[(1, 1), (2, 4)], &[(2, 1), (3, 5)], &[(3, 1)], &[]],
    heuristic: &[2, 2, 1, 0],
    goal: Some(3),
};

/// Admissible but inconsistent heuristic: node 1 is first reached expensively
/// and must be reopened. Optimal cost 7 via 0 -> 2 -> 1 -> 3.
pub static REOPEN: TestGraph = TestGraph {
    edges: &[&[(1, 4), (2, 1)], &[(3, 5)], &[(1, 1)], &[]],
    heuristic: &[0, 0, 5, 0],
    goal: Some(3),
};

/// Finite acyclic space with no goal.
pub static DEAD_END: TestGraph = TestGraph {
    edges: &[&[(1, 1), (3, 2)], &[(2, 1)], &[], &[]],
    heuristic: &[0, 0, 0, 0],
    goal: None,
};

/// Nodes 1 and 2 cannot reach the goal and are estimated at infinity.
/// Optimal cost 3 via 0 -> 3 -> 4.
pub static DEAD_BRANCH: TestGraph = TestGraph {
    edges: &[&[(1, 1), (3, 2)], &[(2, 1)], &[], &[(4, 1)], &[]],
    heuristic: &[3, INFINITE_COST, INFINITE_COST, 1, 0],
    goal: Some(4),
};

/// The goal is isolated and every other node knows it.
pub static HOPELESS: TestGraph = TestGraph {
    edges: &[&[(1, 1)], &[(2, 1)], &[], &[]],
    heuristic: &[INFINITE_COST, INFINITE_COST, INFINITE_COST, 0],
    goal: Some(3),
};

/// Free edges on an acyclic graph. Optimal cost 1 via 0 -> 1 -> 2 -> 3.
pub static ZERO_CHAIN: TestGraph = TestGraph {
    edges: &[&[(1, 0), (3, 2)], &[(2, 0)], &[(3, 1)], &[]],
    heuristic: &[0, 0, 0, 0],
    goal: Some(3),
};

/// A node of a [`TestGraph`]. Identity is the node id only.
#[derive(Clone, Copy)]
pub struct GraphNode {
    pub id: u32,
    pub graph: &'static TestGraph,
}

impl GraphNode {
    pub fn start(graph: &'static TestGraph) -> Self {
        Self { id: 0, graph }
    }
}

impl fmt::Debug for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphNode({})", self.id)
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GraphNode {}

impl Hash for GraphNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl SearchState for GraphNode {
    type Action = Step;

    fn available_actions(&self, _previous: Option<&Step>) -> ActionSlots<Step> {
        let edges = self.graph.edges[self.id as usize];
        let mut slots = ActionSlots::new(edges.len());
        for &(to, cost) in edges {
            slots.push(Step::new(to, cost));
        }
        slots
    }

    fn apply(&self, action: &Step) -> Self {
        Self {
            id: action.to,
            graph: self.graph,
        }
    }

    fn estimate_goal_distance(&self) -> u32 {
        self.graph.heuristic[self.id as usize]
    }

    fn is_goal(&self) -> bool {
        self.graph.goal == Some(self.id)
    }
}

/// Unbounded counter stepping by one towards `target`; the heuristic is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counter {
    pub value: u32,
    pub target: u32,
}

impl SearchState for Counter {
    type Action = Step;

    fn available_actions(&self, _previous: Option<&Step>) -> ActionSlots<Step> {
        let mut slots = ActionSlots::new(1);
        slots.push(Step::new(self.value + 1, 1));
        slots
    }

    fn apply(&self, action: &Step) -> Self {
        Self {
            value: action.to,
            target: self.target,
        }
    }

    fn estimate_goal_distance(&self) -> u32 {
        self.target.saturating_sub(self.value)
    }

    fn is_goal(&self) -> bool {
        self.value == self.target
    }
}
