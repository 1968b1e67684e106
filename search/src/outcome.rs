//! Solve results, termination reasons and run counters.

use sha2::{Digest, Sha256};

use crate::contract::SearchAction;
use crate::path::path_cost;
use crate::search::Algorithm;

/// Why an engine stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal state was reached (possibly the initial state itself).
    GoalReached,
    /// The reachable space was explored without finding a goal.
    SearchExhausted,
    /// `SearchPolicy::max_expansions` was hit.
    ExpansionBudgetExceeded,
    /// The caller's [`crate::probe::CancelToken`] was set.
    Cancelled,
    /// A successor's `f` exceeded the frontier's bucket ceiling (A* only).
    PriorityOverflow { f: u32 },
}

impl Termination {
    /// Stable identifier used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::SearchExhausted => "search_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::Cancelled => "cancelled",
            Self::PriorityOverflow { .. } => "priority_overflow",
        }
    }
}

/// Counters collected during one solve.
///
/// Fields that do not apply to an algorithm stay zero (e.g. `registry_size`
/// for the tree searches, `max_depth` for A*).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Successor states produced.
    pub generated: u64,
    /// Distinct states recorded by the A* registry.
    pub registry_size: u64,
    /// Largest A* frontier size.
    pub frontier_high_water: u64,
    /// Superseded A* frontier entries discarded on pop.
    pub stale_pops: u64,
    /// A* nodes expanded more than once.
    pub reopened: u64,
    /// Deepest explicit stack reached by IDA*/RBFS.
    pub max_depth: u64,
    /// IDA*/RBFS root bound raises.
    pub iterations: u64,
    /// Last IDA*/RBFS root bound.
    pub final_bound: Option<u32>,
}

impl SearchStats {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "generated": self.generated,
            "registry_size": self.registry_size,
            "frontier_high_water": self.frontier_high_water,
            "stale_pops": self.stale_pops,
            "reopened": self.reopened,
            "max_depth": self.max_depth,
            "iterations": self.iterations,
            "final_bound": self.final_bound,
        })
    }
}

/// The result of one solve.
#[derive(Debug, Clone)]
pub struct SolveOutcome<A> {
    pub algorithm: Algorithm,
    /// Actions from the initial state to a goal; empty unless solved with a
    /// non-goal initial state.
    pub actions: Vec<A>,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl<A: SearchAction> SolveOutcome<A> {
    pub(crate) fn solved(algorithm: Algorithm, actions: Vec<A>, stats: SearchStats) -> Self {
        Self {
            algorithm,
            actions,
            termination: Termination::GoalReached,
            stats,
        }
    }

    pub(crate) fn unsolved(
        algorithm: Algorithm,
        termination: Termination,
        stats: SearchStats,
    ) -> Self {
        Self {
            algorithm,
            actions: Vec::new(),
            termination,
            stats,
        }
    }

    /// Returns `true` if a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// Total cost of the returned actions.
    #[must_use]
    pub fn cost(&self) -> u32 {
        path_cost(&self.actions)
    }

    #[must_use]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let actions: Vec<String> = self.actions.iter().map(ToString::to_string).collect();
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "termination": self.termination.as_str(),
            "priority_overflow_f": match self.termination {
                Termination::PriorityOverflow { f } => Some(f),
                _ => None,
            },
            "solved": self.is_solved(),
            "cost": self.cost(),
            "actions": actions,
            "stats": self.stats.to_json_value(),
        })
    }

    /// Compact JSON with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// `sha256:<hex>` digest of the canonical JSON.
    ///
    /// Equal for two runs of a deterministic domain from the same initial
    /// state.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(format!("sha256:{}", hex::encode(Sha256::digest(&bytes))))
    }
}
