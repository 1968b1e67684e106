//! Progress polling and cooperative cancellation.
//!
//! Engines poll both at the same cadence (`SearchPolicy::progress_interval`
//! main-loop iterations). Neither is a process-wide global: the caller owns
//! the flags and hands them to the engine through a [`crate::SearchContext`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Asked by an engine whether a status snapshot should be emitted now.
pub trait ProgressProbe {
    fn status_requested(&self) -> bool;
}

/// Probe that never asks for a status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverReport;

impl ProgressProbe for NeverReport {
    fn status_requested(&self) -> bool {
        false
    }
}

impl<F: Fn() -> bool> ProgressProbe for F {
    fn status_requested(&self) -> bool {
        self()
    }
}

/// Shared flag raised by a timer or signal bridge and consumed by the engine.
///
/// Reading the flag clears it, so one raise yields one status line.
#[derive(Debug, Clone, Default)]
pub struct StatusFlag {
    raised: Arc<AtomicBool>,
}

impl StatusFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a status line at the next poll.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }
}

impl ProgressProbe for StatusFlag {
    fn status_requested(&self) -> bool {
        self.raised.swap(false, Ordering::Relaxed)
    }
}

/// Cooperative cancellation handle.
///
/// Clones share the same flag. Once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
