//! Game rules: turn inference, legal moves, move application, and scoring.
//!
//! All functions are pure and total over well-formed 3x3 boards, with one
//! exception: `result` returns `InvalidAction` when asked to play an
//! occupied or out-of-range cell. Nothing here holds state; the board
//! value is the entire game.

pub mod engine;
pub mod outcome;

pub use engine::{
    actions, initial_state, player, result, terminal, utility, winner, ActionList,
    InvalidAction, WINNING_LINES,
};
pub use outcome::{outcome, Outcome};
