//! Sliding tile puzzle on a `ROWS x COLS` board with one blank.
//!
//! Solved layout is row-major `0, 1, 2, ...` with the blank (`0`) in the top
//! left corner. Each move slides one tile into the blank at cost 1. The
//! heuristic is the Manhattan distance of every numbered tile, maintained
//! incrementally by [`SlidingPuzzle::apply`]; the blank is not counted, so
//! the estimate never exceeds the true distance.

use std::fmt;

use quarry_search::{ActionSlots, SearchAction, SearchState};

use crate::contract::PuzzleWorld;
use crate::error::HarnessError;
use crate::worlds::hole_move::{cell_distance, check_permutation, home_cell, write_board, HoleMove};

/// 3x3 board.
pub type EightPuzzle = SlidingPuzzle<3, 3>;
/// 4x4 board.
pub type FifteenPuzzle = SlidingPuzzle<4, 4>;

impl SearchAction for HoleMove {
    fn cost(&self) -> u32 {
        1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlidingPuzzle<const ROWS: usize, const COLS: usize> {
    tiles: [[u8; COLS]; ROWS],
    hole: (usize, usize),
    /// Sum of Manhattan distances of the numbered tiles.
    goal_distance: u32,
}

impl<const ROWS: usize, const COLS: usize> SlidingPuzzle<ROWS, COLS> {
    pub const CELLS: usize = ROWS * COLS;

    #[must_use]
    pub fn hole(&self) -> (usize, usize) {
        self.hole
    }

    /// Full Manhattan recount; `goal_distance` must always equal this.
    fn manhattan(&self) -> u32 {
        let mut total = 0;
        for (r, row) in self.tiles.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if tile != 0 {
                    total += cell_distance((r, c), home_cell(tile, COLS));
                }
            }
        }
        total
    }

    /// Move the blank, or `None` if it would leave the board.
    #[must_use]
    pub fn try_move(&self, direction: HoleMove) -> Option<Self> {
        let from = self.hole;
        let to = direction.step(from, ROWS, COLS)?;
        let tile = self.tiles[to.0][to.1];
        let home = home_cell(tile, COLS);

        let mut next = self.clone();
        next.tiles[from.0][from.1] = tile;
        next.tiles[to.0][to.1] = 0;
        next.hole = to;
        next.goal_distance = self.goal_distance - cell_distance(to, home) + cell_distance(from, home);
        Some(next)
    }
}

impl<const ROWS: usize, const COLS: usize> SearchState for SlidingPuzzle<ROWS, COLS> {
    type Action = HoleMove;

    fn available_actions(&self, previous: Option<&HoleMove>) -> ActionSlots<HoleMove> {
        let undo = previous.map(|m| m.reverse());
        let mut slots = ActionSlots::new(HoleMove::ALL.len());
        for direction in HoleMove::ALL {
            let on_board = direction.step(self.hole, ROWS, COLS).is_some();
            slots.push_if(on_board && undo != Some(direction), direction);
        }
        slots
    }

    fn apply(&self, action: &HoleMove) -> Self {
        let next = self.try_move(*action);
        debug_assert!(next.is_some(), "{action} is off the board");
        next.unwrap_or_else(|| self.clone())
    }

    fn estimate_goal_distance(&self) -> u32 {
        self.goal_distance
    }

    fn is_goal(&self) -> bool {
        self.goal_distance == 0
    }
}

impl<const ROWS: usize, const COLS: usize> PuzzleWorld for SlidingPuzzle<ROWS, COLS> {
    fn world_id(&self) -> String {
        format!("sliding_{ROWS}x{COLS}")
    }

    fn solved() -> Self {
        let mut tiles = [[0u8; COLS]; ROWS];
        for (r, row) in tiles.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = u8::try_from(r * COLS + c).unwrap_or(u8::MAX);
            }
        }
        Self {
            tiles,
            hole: (0, 0),
            goal_distance: 0,
        }
    }

    fn tiles(&self) -> Vec<u8> {
        self.tiles.iter().flatten().copied().collect()
    }

    /// Build a board from row-major tile values, `0` marking the blank.
    ///
    /// Unsolvable layouts are accepted; check [`Self::is_solvable`] first if
    /// that matters.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::WrongTileCount`] or
    /// [`HarnessError::NotAPermutation`] for malformed input, and
    /// [`HarnessError::UnsupportedBoard`] if the board has more cells than
    /// tile values can name.
    fn from_tiles(values: &[u8]) -> Result<Self, HarnessError> {
        if Self::CELLS > usize::from(u8::MAX) + 1 || ROWS == 0 || COLS == 0 {
            return Err(HarnessError::UnsupportedBoard {
                detail: format!("{ROWS}x{COLS}"),
            });
        }
        check_permutation(values, Self::CELLS)?;

        let mut tiles = [[0u8; COLS]; ROWS];
        let mut hole = (0, 0);
        for (i, &value) in values.iter().enumerate() {
            let cell = (i / COLS, i % COLS);
            tiles[cell.0][cell.1] = value;
            if value == 0 {
                hole = cell;
            }
        }
        let mut puzzle = Self {
            tiles,
            hole,
            goal_distance: 0,
        };
        puzzle.goal_distance = puzzle.manhattan();
        Ok(puzzle)
    }

    /// Whether the solved layout is reachable.
    ///
    /// Every move swaps the blank with a neighbour: one transposition of the
    /// cell permutation, and one step of blank displacement. So the parity
    /// of the permutation must match the parity of the blank's distance from
    /// its home cell.
    fn is_solvable(&self) -> bool {
        let flat = self.tiles();
        let mut inversions = 0usize;
        for i in 0..flat.len() {
            for j in i + 1..flat.len() {
                if flat[i] > flat[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == (self.hole.0 + self.hole.1) % 2
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Display for SlidingPuzzle<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, &self.tiles(), COLS, |tile| tile == 0)
    }
}
