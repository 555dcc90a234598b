//! # ttt-engine
//!
//! A perfect-play tic-tac-toe engine built on exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Immutable board values**: `Board` is a `Copy` value. Applying a
//!    move produces a fresh board; nothing is ever mutated in place, so
//!    searches on different boards can run concurrently with no locking.
//!
//! 2. **Derived, not stored**: whose turn it is and whether the game is
//!    over are computed from the board on demand. There is no hidden
//!    "current player" or "game over" field to drift out of sync.
//!
//! 3. **Exhaustive, deterministic search**: the 3x3 game tree is small
//!    enough to search completely, so the engine does exactly that - no
//!    pruning, no caching, and a fixed tie-break that makes every move
//!    reproducible.
//!
//! ## Modules
//!
//! - `core`: board, mark, and action value types
//! - `rules`: turn inference, legal moves, move application, scoring
//! - `search`: the minimax decision procedure
//!
//! ## Usage
//!
//! The caller owns the game loop; the engine is a set of pure functions
//! over board values:
//!
//! ```
//! use ttt_engine::{rules, search};
//!
//! let mut board = rules::initial_state();
//!
//! // Play both sides perfectly until the game ends.
//! while !rules::terminal(&board) {
//!     let action = search::minimax(&board).expect("non-terminal board has a move");
//!     board = rules::result(&board, action).expect("minimax only picks legal moves");
//! }
//!
//! // Perfect play from both sides is a draw.
//! assert_eq!(rules::outcome(&board), ttt_engine::Outcome::Draw);
//! ```

pub mod core;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, Board, Cell, Mark, BOARD_SIZE};

pub use crate::rules::{ActionList, InvalidAction, Outcome};

pub use crate::search::{MinimaxSearch, SearchStats};
