//! Sliding puzzle with two blanks of different weight.
//!
//! Tiles `0` and `1` are both blanks. Moving blank `k` costs `1 + k`, so the
//! cheapest solution prefers the light blank. Blank 0 may slide into blank 1
//! (the two swap places); blank 1 may not slide into blank 0. Solved layout
//! is row-major with blank 0 at the top left and blank 1 beside it.

use std::fmt;

use quarry_search::{ActionSlots, SearchAction, SearchState};

use crate::contract::PuzzleWorld;
use crate::error::HarnessError;
use crate::worlds::hole_move::{cell_distance, check_permutation, home_cell, write_board, HoleMove};

/// Four directions for each of the two blanks.
pub const MAX_BRANCH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleStep {
    /// Which blank moves: 0 or 1.
    pub hole: u8,
    pub direction: HoleMove,
}

impl HoleStep {
    #[must_use]
    pub fn new(hole: u8, direction: HoleMove) -> Self {
        Self { hole, direction }
    }

    fn reverse(self) -> Self {
        Self::new(self.hole, self.direction.reverse())
    }
}

impl SearchAction for HoleStep {
    fn cost(&self) -> u32 {
        1 + u32::from(self.hole)
    }
}

impl fmt::Display for HoleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.hole)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TwoHolePuzzle<const ROWS: usize, const COLS: usize> {
    tiles: [[u8; COLS]; ROWS],
    holes: [(usize, usize); 2],
    /// Manhattan distance of the numbered tiles (`>= 2`) only.
    goal_distance: u32,
}

impl<const ROWS: usize, const COLS: usize> TwoHolePuzzle<ROWS, COLS> {
    pub const CELLS: usize = ROWS * COLS;
    const HOME: [(usize, usize); 2] = [(0, 0), (0, 1)];

    #[must_use]
    pub fn holes(&self) -> [(usize, usize); 2] {
        self.holes
    }

    fn manhattan(&self) -> u32 {
        let mut total = 0;
        for (r, row) in self.tiles.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if tile >= 2 {
                    total += cell_distance((r, c), home_cell(tile, COLS));
                }
            }
        }
        total
    }

    fn target(&self, step: HoleStep) -> Option<(usize, usize)> {
        let k = usize::from(step.hole);
        let from = *self.holes.get(k)?;
        let to = step.direction.step(from, ROWS, COLS)?;
        if k == 1 && to == self.holes[0] {
            return None;
        }
        Some(to)
    }

    /// Move one blank, or `None` if the step is not legal here.
    #[must_use]
    pub fn try_step(&self, step: HoleStep) -> Option<Self> {
        let to = self.target(step)?;
        let k = usize::from(step.hole);
        let from = self.holes[k];
        let value = self.tiles[to.0][to.1];

        let mut next = self.clone();
        next.tiles[from.0][from.1] = value;
        next.tiles[to.0][to.1] = step.hole;
        next.holes[k] = to;
        if value < 2 {
            next.holes[usize::from(value)] = from;
        } else {
            let home = home_cell(value, COLS);
            next.goal_distance =
                self.goal_distance - cell_distance(to, home) + cell_distance(from, home);
        }
        Some(next)
    }
}

impl<const ROWS: usize, const COLS: usize> SearchState for TwoHolePuzzle<ROWS, COLS> {
    type Action = HoleStep;

    fn available_actions(&self, previous: Option<&HoleStep>) -> ActionSlots<HoleStep> {
        let undo = previous.map(|step| step.reverse());
        let mut slots = ActionSlots::new(MAX_BRANCH);
        for hole in 0..2u8 {
            for direction in HoleMove::ALL {
                let step = HoleStep::new(hole, direction);
                slots.push_if(self.target(step).is_some() && undo != Some(step), step);
            }
        }
        slots
    }

    fn apply(&self, action: &HoleStep) -> Self {
        let next = self.try_step(*action);
        debug_assert!(next.is_some(), "{action} is not legal here");
        next.unwrap_or_else(|| self.clone())
    }

    fn estimate_goal_distance(&self) -> u32 {
        self.goal_distance
    }

    fn is_goal(&self) -> bool {
        self.goal_distance == 0 && self.holes == Self::HOME
    }
}

impl<const ROWS: usize, const COLS: usize> PuzzleWorld for TwoHolePuzzle<ROWS, COLS> {
    fn world_id(&self) -> String {
        format!("two_hole_{ROWS}x{COLS}")
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
            holes: Self::HOME,
            goal_distance: 0,
        }
    }

    fn tiles(&self) -> Vec<u8> {
        self.tiles.iter().flatten().copied().collect()
    }

    /// Build a board from row-major tile values; `0` and `1` are the blanks.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnsupportedBoard`] for boards smaller than
    /// 2x2 or too large for `u8` tiles, and
    /// [`HarnessError::WrongTileCount`] / [`HarnessError::NotAPermutation`]
    /// for malformed input.
    fn from_tiles(values: &[u8]) -> Result<Self, HarnessError> {
        if COLS < 2 || ROWS < 2 || Self::CELLS > usize::from(u8::MAX) + 1 {
            return Err(HarnessError::UnsupportedBoard {
                detail: format!("two-hole {ROWS}x{COLS}"),
            });
        }
        check_permutation(values, Self::CELLS)?;

        let mut tiles = [[0u8; COLS]; ROWS];
        let mut holes = Self::HOME;
        for (i, &value) in values.iter().enumerate() {
            let cell = (i / COLS, i % COLS);
            tiles[cell.0][cell.1] = value;
            if value < 2 {
                holes[usize::from(value)] = cell;
            }
        }
        let mut puzzle = Self {
            tiles,
            holes,
            goal_distance: 0,
        };
        puzzle.goal_distance = puzzle.manhattan();
        Ok(puzzle)
    }

    /// A second blank lets any pair of tiles trade places, so every layout
    /// of a board at least 2x2 reaches the goal.
    fn is_solvable(&self) -> bool {
        true
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Display for TwoHolePuzzle<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, &self.tiles(), COLS, |tile| tile < 2)
    }
}
