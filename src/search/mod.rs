//! Minimax decision procedure.
//!
//! The only consumer of the rules module. Given a non-terminal board,
//! [`minimax`] returns the optimal action for the player to move under
//! optimal play from both sides. [`MinimaxSearch`] wraps the same search
//! with per-call [`SearchStats`] and tracing.

pub mod minimax;
pub mod stats;

pub use minimax::{max_value, min_value, minimax, MinimaxSearch};
pub use stats::SearchStats;
