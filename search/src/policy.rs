//! Search policy types.

use crate::error::SearchError;

/// Default number of main-loop iterations between progress polls.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Default bucket ceiling for the A* frontier.
pub const DEFAULT_MAX_PRIORITY: u32 = 1 << 20;

/// Budget, cadence and sizing configuration shared by all engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Main-loop iterations between polls of the cancel token and progress probe.
    pub progress_interval: u64,
    /// Hard cap on node expansions (`None` = run to natural completion).
    pub max_expansions: Option<u64>,
    /// Number of registry slots reserved up front (A* only).
    pub registry_capacity: usize,
    /// Largest `f` the bucket frontier will accept (A* only).
    pub max_priority: u32,
}

impl SearchPolicy {
    /// Check that every field is usable by the engines.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `progress_interval` or
    /// `max_priority` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.progress_interval == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "progress_interval must be at least 1".into(),
            });
        }
        if self.max_priority == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_priority must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` has reached the configured budget.
    #[must_use]
    pub fn budget_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|cap| expansions >= cap)
    }

    /// JSON echo of the policy for run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "progress_interval": self.progress_interval,
            "max_expansions": self.max_expansions,
            "registry_capacity": self.registry_capacity,
            "max_priority": self.max_priority,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_expansions: None,
            registry_capacity: 4096,
            max_priority: DEFAULT_MAX_PRIORITY,
        }
    }
}
