//! Exhaustive minimax over the full game tree.
//!
//! No pruning, no transposition cache, no depth limit: the tree is at
//! most 9 plies deep with branching factor at most 9, so exhaustive
//! search is cheap and exact. X maximizes the terminal utility, O
//! minimizes it.
//!
//! ## Tie-breaking
//!
//! When several moves share the optimal value, the first one found wins,
//! scanning in the row-major order of `rules::actions`. That choice is
//! not forced by game theory, but it makes the engine deterministic:
//! identical boards always produce identical moves.

use std::time::Instant;

use crate::core::{Action, Board, Mark};
use crate::rules;

use super::stats::SearchStats;

/// The optimal action for the player to move on `board`.
///
/// Returns `None` on terminal boards: there is no move to make, and that
/// is not an error. Callers that need to distinguish "game over" from
/// "engine declined" should check `rules::terminal` themselves.
///
/// ## Example
///
/// ```
/// use ttt_engine::core::{Action, Board, Mark};
/// use ttt_engine::search::minimax;
///
/// const X: Option<Mark> = Some(Mark::X);
/// const O: Option<Mark> = Some(Mark::O);
/// const E: Option<Mark> = None;
///
/// // X completes the top row rather than playing anywhere else.
/// let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
/// ```
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    minimax_with_stats(board, &mut SearchStats::new())
}

/// The best value X can force from `board` with X to move.
///
/// Terminal boards score as `rules::utility`; otherwise the maximum of
/// `min_value` over every successor.
#[must_use]
pub fn max_value(board: &Board) -> i8 {
    max_value_at(board, 0, &mut SearchStats::new())
}

/// The best value O can force from `board` with O to move.
///
/// Terminal boards score as `rules::utility`; otherwise the minimum of
/// `max_value` over every successor.
#[must_use]
pub fn min_value(board: &Board) -> i8 {
    min_value_at(board, 0, &mut SearchStats::new())
}

/// Minimax search context that records statistics.
///
/// Semantics are identical to the free [`minimax`] function; this wrapper
/// additionally collects [`SearchStats`] and emits a `tracing` debug
/// event per completed search. Reusable across calls: each search resets
/// the statistics.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the optimal action for the player to move on `board`.
    ///
    /// Returns `None` on terminal boards, like [`minimax`].
    pub fn choose_action(&mut self, board: &Board) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        let action = minimax_with_stats(board, &mut self.stats);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            chosen = ?action,
            nodes = self.stats.nodes_visited,
            leaves = self.stats.terminal_leaves,
            depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "minimax search complete"
        );

        action
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

fn minimax_with_stats(board: &Board, stats: &mut SearchStats) -> Option<Action> {
    stats.nodes_visited += 1;

    if rules::terminal(board) {
        stats.terminal_leaves += 1;
        return None;
    }

    let current = rules::player(board);
    let mut best_action = None;

    match current {
        Mark::X => {
            let mut best = i8::MIN;
            for action in rules::actions(board) {
                // actions() only yields empty in-range cells, so result
                // cannot fail on them
                let Ok(next) = rules::result(board, action) else {
                    continue;
                };
                let value = min_value_at(&next, 1, stats);
                if value > best {
                    best = value;
                    best_action = Some(action);
                }
            }
        }
        Mark::O => {
            let mut best = i8::MAX;
            for action in rules::actions(board) {
                let Ok(next) = rules::result(board, action) else {
                    continue;
                };
                let value = max_value_at(&next, 1, stats);
                if value < best {
                    best = value;
                    best_action = Some(action);
                }
            }
        }
    }

    best_action
}

fn max_value_at(board: &Board, depth: u16, stats: &mut SearchStats) -> i8 {
    stats.nodes_visited += 1;
    if depth > stats.max_depth {
        stats.max_depth = depth;
    }

    if rules::terminal(board) {
        stats.terminal_leaves += 1;
        return rules::utility(board);
    }

    let mut value = i8::MIN;
    for action in rules::actions(board) {
        let Ok(next) = rules::result(board, action) else {
            continue;
        };
        value = value.max(min_value_at(&next, depth + 1, stats));
    }
    value
}

fn min_value_at(board: &Board, depth: u16, stats: &mut SearchStats) -> i8 {
    stats.nodes_visited += 1;
    if depth > stats.max_depth {
        stats.max_depth = depth;
    }

    if rules::terminal(board) {
        stats.terminal_leaves += 1;
        return rules::utility(board);
    }

    let mut value = i8::MAX;
    for action in rules::actions(board) {
        let Ok(next) = rules::result(board, action) else {
            continue;
        };
        value = value.min(max_value_at(&next, depth + 1, stats));
    }
    value
}
