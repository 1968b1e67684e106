//! Search entry points and the context shared by every engine.

use std::fmt;
use std::str::FromStr;

use crate::contract::{GoalEvaluator, SearchState};
use crate::error::SearchError;
use crate::outcome::{SolveOutcome, Termination};
use crate::policy::SearchPolicy;
use crate::probe::{CancelToken, NeverReport, ProgressProbe};

/// Selectable search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Best-first graph search over a deduplicating registry.
    AStar,
    /// Iterative-deepening depth-first tree search.
    IdaStar,
    /// Recursive best-first tree search, run on an explicit stack.
    Rbfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::IdaStar, Algorithm::Rbfs];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::IdaStar => "ida_star",
            Self::Rbfs => "rbfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" | "a-star" => Ok(Self::AStar),
            "ida_star" | "ida-star" | "idastar" => Ok(Self::IdaStar),
            "rbfs" => Ok(Self::Rbfs),
            other => Err(SearchError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// Callbacks and configuration handed to an engine for one solve.
pub struct SearchContext<'a, S> {
    pub evaluator: &'a dyn GoalEvaluator<S>,
    pub probe: &'a dyn ProgressProbe,
    pub cancel: Option<CancelToken>,
    pub policy: SearchPolicy,
}

impl<'a, S> SearchContext<'a, S> {
    /// Context with the default policy, no status lines and no cancellation.
    #[must_use]
    pub fn new(evaluator: &'a dyn GoalEvaluator<S>) -> Self {
        Self {
            evaluator,
            probe: &NeverReport,
            cancel: None,
            policy: SearchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_probe(mut self, probe: &'a dyn ProgressProbe) -> Self {
        self.probe = probe;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Periodic poll run at the top of every engine loop iteration.
    ///
    /// On the configured cadence this checks cancellation, then asks the
    /// probe whether to call `snapshot`. The budget is checked every time.
    pub(crate) fn checkpoint(
        &self,
        iteration: u64,
        expansions: u64,
        snapshot: impl FnOnce(),
    ) -> Option<Termination> {
        if self.policy.budget_exhausted(expansions) {
            return Some(Termination::ExpansionBudgetExceeded);
        }
        if iteration % self.policy.progress_interval != 0 {
            return None;
        }
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(Termination::Cancelled);
        }
        if self.probe.status_requested() {
            snapshot();
        }
        None
    }
}

/// Run `algorithm` from `initial`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the context's policy fails
/// validation. Every runtime stop is reported through
/// [`SolveOutcome::termination`].
pub fn solve<S: SearchState>(
    algorithm: Algorithm,
    initial: &S,
    ctx: &SearchContext<'_, S>,
) -> Result<SolveOutcome<S::Action>, SearchError> {
    match algorithm {
        Algorithm::AStar => crate::astar::astar(initial, ctx),
        Algorithm::IdaStar => crate::idastar::ida_star(initial, ctx),
        Algorithm::Rbfs => crate::rbfs::rbfs(initial, ctx),
    }
}

/// Run `algorithm` and keep only the action sequence (empty on failure).
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_actions<S: SearchState>(
    algorithm: Algorithm,
    initial: &S,
    ctx: &SearchContext<'_, S>,
) -> Result<Vec<S::Action>, SearchError> {
    Ok(solve(algorithm, initial, ctx)?.into_actions())
}
