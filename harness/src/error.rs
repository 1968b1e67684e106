//! Typed harness errors.

use quarry_search::SearchError;

/// Failure while building a world, running a solve or writing its report.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Tile layout has the wrong number of cells for the board.
    #[error("tile layout has {actual} cells, expected {expected}")]
    WrongTileCount { expected: usize, actual: usize },
    /// Tile layout is not a permutation of `0..cells`.
    #[error("tile layout is not a permutation of 0..{cells}: {detail}")]
    NotAPermutation { cells: usize, detail: String },
    /// Layout is in the other parity class from the solved arrangement.
    #[error("tile layout cannot reach the solved arrangement")]
    Unsolvable,
    /// Board dimensions not supported by this world.
    #[error("unsupported board: {detail}")]
    UnsupportedBoard { detail: String },
    /// Route graph edge names a node that does not exist.
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    UnknownNode { node: u32, node_count: usize },
    /// A solved outcome did not replay into a goal state.
    #[error("replayed solution does not end in a goal state")]
    ReplayMismatch,
    /// Pre-flight search failure.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Report serialization failed.
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Report I/O failed.
    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
