//! Board representation.
//!
//! ## Value semantics
//!
//! `Board` is a `Copy` value: applying a move produces a fresh board and
//! never aliases or mutates the original. This is what makes the search
//! module safe to run on the same board from multiple callers without
//! synchronization, and what keeps the rules functions pure.
//!
//! ## Invariants
//!
//! A board reached from `Board::empty()` through legal moves satisfies:
//! - exactly the played cells are non-empty
//! - `count(X) - count(O)` is 0 or 1 (X always moves first)
//!
//! `Board::from_rows` can construct arbitrary grids for tests and
//! callers; the rules functions that infer the turn (`rules::player`)
//! assume the alternating-play invariant holds.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Side length of the grid. The engine supports 3x3 only.
pub const BOARD_SIZE: usize = 3;

/// A single cell: occupied by a mark, or empty.
pub type Cell = Option<Mark>;

/// A 3x3 tic-tac-toe board.
///
/// ## Example
///
/// ```
/// use ttt_engine::core::{Board, Mark};
///
/// let board = Board::empty();
/// assert!(!board.is_full());
/// assert_eq!(board.count(Mark::X), 0);
/// assert_eq!(board.get(0, 0), Some(None));
/// assert_eq!(board.get(3, 0), None); // out of range
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with all 9 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board from explicit rows.
    ///
    /// No reachability check is performed; callers constructing test
    /// positions are responsible for the alternating-play invariant.
    #[must_use]
    pub const fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// Get the cell at `(row, col)`, or `None` if out of range.
    ///
    /// The outer `Option` is range-checking; the inner `Cell` is the
    /// occupant.
    #[must_use]
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Get the full grid by value.
    #[must_use]
    pub const fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    /// Iterate over all cells as `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, &cell)| (row as u8, col as u8, cell))
        })
    }

    /// Count cells occupied by `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.iter().filter(|&(_, _, cell)| cell == Some(mark)).count()
    }

    /// Count occupied cells of either mark.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.iter().filter(|&(_, _, cell)| cell.is_some()).count()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied() == BOARD_SIZE * BOARD_SIZE
    }

    /// Return a new board with `mark` placed at `(row, col)`.
    ///
    /// Consumes a copy; the source board is untouched. Bounds and
    /// emptiness are the caller's responsibility, which is why this is
    /// crate-internal: `rules::result` is the validated public path.
    pub(crate) fn with_mark(mut self, row: usize, col: usize, mark: Mark) -> Self {
        self.cells[row][col] = Some(mark);
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cols) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cols.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
