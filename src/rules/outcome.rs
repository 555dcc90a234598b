//! Derived game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Mark};

use super::engine::{terminal, winner};

/// The state of a game as derived from a board.
///
/// Never stored: compute it when needed with [`outcome`]. Callers driving
/// a game loop typically check [`Outcome::is_over`] each turn and match on
/// the value for the end-of-game message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner(Mark),
    /// Board full with no winner.
    Draw,
    /// Game still in progress.
    Undecided,
}

impl Outcome {
    /// Check if `mark` won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, Outcome::Winner(m) if *m == mark)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Undecided => write!(f, "undecided"),
        }
    }
}

/// Derive the outcome of `board`.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Winner(mark),
        None if terminal(board) => Outcome::Draw,
        None => Outcome::Undecided,
    }
}
