//! Core value types: marks, the board, and actions.
//!
//! Everything here is a plain `Copy` value with no behavior beyond
//! construction and inspection. Game semantics live in `rules`; the
//! decision procedure lives in `search`.

pub mod action;
pub mod board;
pub mod mark;

pub use action::Action;
pub use board::{Board, Cell, BOARD_SIZE};
pub use mark::Mark;
