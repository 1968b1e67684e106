//! Blank-tile moves shared by the tile puzzles.

use std::fmt;

/// Direction the blank travels. Moving the blank `Up` slides the tile above
/// it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleMove {
    Up,
    Down,
    Left,
    Right,
}

impl HoleMove {
    /// Generation order used by every tile world.
    pub const ALL: [HoleMove; 4] = [
        HoleMove::Up,
        HoleMove::Down,
        HoleMove::Left,
        HoleMove::Right,
    ];

    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Cell reached from `(row, col)` on a `rows x cols` board, if any.
    #[must_use]
    pub fn step(self, (row, col): (usize, usize), rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            Self::Up => row.checked_sub(1).map(|r| (r, col)),
            Self::Down => (row + 1 < rows).then_some((row + 1, col)),
            Self::Left => col.checked_sub(1).map(|c| (row, c)),
            Self::Right => (col + 1 < cols).then_some((row, col + 1)),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for HoleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Taxicab distance between two cells.
pub(crate) fn cell_distance(a: (usize, usize), b: (usize, usize)) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Home cell of tile `value` in the row-major solved layout.
pub(crate) fn home_cell(value: u8, cols: usize) -> (usize, usize) {
    let v = usize::from(value);
    (v / cols, v % cols)
}

/// Check that `tiles` is a permutation of `0..cells`.
pub(crate) fn check_permutation(tiles: &[u8], cells: usize) -> Result<(), crate::error::HarnessError> {
    use crate::error::HarnessError;

    if tiles.len() != cells {
        return Err(HarnessError::WrongTileCount {
            expected: cells,
            actual: tiles.len(),
        });
    }
    let mut seen = vec![false; cells];
    for &tile in tiles {
        let index = usize::from(tile);
        if index >= cells {
            return Err(HarnessError::NotAPermutation {
                cells,
                detail: format!("tile {tile} out of range"),
            });
        }
        if seen[index] {
            return Err(HarnessError::NotAPermutation {
                cells,
                detail: format!("tile {tile} appears twice"),
            });
        }
        seen[index] = true;
    }
    Ok(())
}

/// Write a board as rows of right-aligned cells, blanks shown as `.`.
pub(crate) fn write_board(
    f: &mut fmt::Formatter<'_>,
    tiles: &[u8],
    cols: usize,
    is_blank: impl Fn(u8) -> bool,
) -> fmt::Result {
    for row in tiles.chunks(cols) {
        for (i, &tile) in row.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if is_blank(tile) {
                write!(f, "{:>2}", ".")?;
            } else {
                write!(f, "{tile:>2}")?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}
