//! Legal-move and scoring semantics.
//!
//! Every function here is pure: deterministic on its input, no side
//! effects, no stored turn or outcome. The board alone is the state;
//! whose turn it is, which moves are legal, and who has won are all
//! derived on demand.

use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Action, Board, Mark};

/// Legal actions for one board. At most 9 entries, so the list never
/// touches the heap.
pub type ActionList = SmallVec<[Action; 9]>;

/// The 8 winning lines as `(row, col)` triples, in scan order:
/// 3 rows, then 3 columns, then the 2 diagonals.
///
/// `winner` reports the mark of the first complete line in this order.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Error returned by [`result`] when an action does not target an empty
/// in-range cell of the given board.
///
/// This is the engine's only failure mode. It propagates rather than
/// being corrected: an invalid action means the caller submitted a move
/// against the wrong board (or out of range), and clamping it would hide
/// that bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid action {action}: cell is occupied or out of range")]
pub struct InvalidAction {
    /// The rejected action.
    pub action: Action,
}

/// The starting state: all 9 cells empty.
///
/// ## Example
///
/// ```
/// use ttt_engine::rules;
///
/// let board = rules::initial_state();
/// assert_eq!(rules::actions(&board).len(), 9);
/// ```
#[must_use]
pub fn initial_state() -> Board {
    Board::empty()
}

/// The mark to move on `board`.
///
/// X moves first, so equal X and O counts (including the empty board)
/// mean X to move; otherwise O. This is the sole source of truth for the
/// turn; it assumes the board was reached under strict alternating play.
#[must_use]
pub fn player(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// All legal actions on `board`: every empty cell, in row-major order
/// `(0,0), (0,1), (0,2), (1,0), ...`.
///
/// The order is fixed and documented because minimax breaks ties by
/// keeping the first optimum found in this order; a nondeterministic
/// order would make the chosen move irreproducible. Empty when the board
/// is full.
#[must_use]
pub fn actions(board: &Board) -> ActionList {
    board
        .iter()
        .filter(|&(_, _, cell)| cell.is_none())
        .map(|(row, col, _)| Action::new(row, col))
        .collect()
}

/// Apply `action` to `board`, returning the resulting board.
///
/// The target cell receives the mark of `player(board)`. The input board
/// is never mutated; the returned board is an independent value.
///
/// ## Errors
///
/// `InvalidAction` if the target cell is out of range or occupied, i.e.
/// whenever `action` is not in `actions(board)`.
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    match board.get(action.row, action.col) {
        Some(None) => Ok(board.with_mark(
            action.row as usize,
            action.col as usize,
            player(board),
        )),
        _ => Err(InvalidAction { action }),
    }
}

/// The winning mark, if any line of three is complete.
///
/// Scans [`WINNING_LINES`] in order and returns the mark of the first
/// uniform non-empty line. Under legal play at most one mark can have a
/// complete line, but the first-match rule holds regardless of how the
/// board was built.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for line in &WINNING_LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        if let Some(first) = cells[r0][c0] {
            if cells[r1][c1] == Some(first) && cells[r2][c2] == Some(first) {
                return Some(first);
            }
        }
    }
    None
}

/// Whether the game is over: someone has won, or the board is full.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Terminal score from X's perspective: 1 if X won, -1 if O won, 0
/// otherwise.
///
/// Only meaningful when `terminal(board)` is true. Calling it on a
/// non-terminal board returns 0 by the same rule but carries no game
/// meaning; that precondition is contractual, not checked.
#[must_use]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}
