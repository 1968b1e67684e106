//! Puzzle world contract: what the runner needs beyond the search contract.
//!
//! The search engines only see [`SearchState`]. The runner additionally
//! needs a solved arrangement to scramble from, a stable identifier for
//! reports, and a flat tile view for report bodies.

use std::fmt::Display;

use quarry_search::SearchState;

use crate::error::HarnessError;

/// A tile puzzle the runner can scramble, solve and report on.
pub trait PuzzleWorld: SearchState + Display {
    /// Unique world identifier (e.g. `"sliding_3x3"`).
    fn world_id(&self) -> String;

    /// The goal arrangement.
    fn solved() -> Self;

    /// Build a state from row-major tile values.
    ///
    /// # Errors
    ///
    /// Returns a [`HarnessError`] if the values do not describe a board of
    /// this world.
    fn from_tiles(values: &[u8]) -> Result<Self, HarnessError>;

    /// Whether the goal arrangement is reachable from this state.
    fn is_solvable(&self) -> bool;

    /// Row-major tile values.
    fn tiles(&self) -> Vec<u8>;
}
