//! Action representation: a (row, column) cell coordinate.
//!
//! An action identifies the empty cell the current player claims. Actions
//! are only meaningful relative to a specific board: an action that is
//! legal for one board may be occupied (or out of range) on another. The
//! rules module validates actions when they are applied.

use serde::{Deserialize, Serialize};

/// A move: place the current player's mark at `(row, col)`.
///
/// Coordinates are 0-based, row-major. Construction does not validate
/// against any board; `rules::result` rejects out-of-range or occupied
/// targets with `InvalidAction`.
///
/// ## Example
///
/// ```
/// use ttt_engine::core::Action;
///
/// let center = Action::new(1, 1);
/// assert_eq!(center.row, 1);
/// assert_eq!(center.col, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0-2 on a legal board).
    pub row: u8,

    /// Column index (0-2 on a legal board).
    pub col: u8,
}

impl Action {
    /// Create an action targeting `(row, col)`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
