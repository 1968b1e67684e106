//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, exhausted space, budget, cancellation) are expressed via
//! [`crate::outcome::Termination`] inside a [`crate::outcome::SolveOutcome`].

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first expansion. No outcome is
/// produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A policy field is outside its accepted range.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// An algorithm name did not match any engine.
    #[error("unknown algorithm '{name}' (expected astar, ida_star or rbfs)")]
    UnknownAlgorithm { name: String },
}
