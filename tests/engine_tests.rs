//! End-to-end engine tests: full games driven through the public API.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ttt_engine::core::{Action, Board, Mark};
use ttt_engine::rules;
use ttt_engine::search::{minimax, MinimaxSearch};
use ttt_engine::Outcome;

/// Play one game where `engine_mark`'s moves come from minimax and the
/// other side's moves come from `opponent`.
fn play_game(
    engine_mark: Mark,
    mut opponent: impl FnMut(&Board) -> Action,
) -> Outcome {
    let mut board = rules::initial_state();

    while !rules::terminal(&board) {
        let action = if rules::player(&board) == engine_mark {
            minimax(&board).expect("non-terminal board has a move")
        } else {
            opponent(&board)
        };
        board = rules::result(&board, action).expect("chosen move must be legal");
    }

    rules::outcome(&board)
}

fn random_move(rng: &mut ChaCha8Rng, board: &Board) -> Action {
    let actions = rules::actions(board);
    actions[rng.gen_range(0..actions.len())]
}

// =============================================================================
// Perfect Play
// =============================================================================

#[test]
fn test_perfect_self_play_is_a_draw() {
    let mut board = rules::initial_state();
    let mut moves = 0;

    while !rules::terminal(&board) {
        let action = minimax(&board).expect("non-terminal board has a move");
        board = rules::result(&board, action).expect("minimax picks legal moves");
        moves += 1;
    }

    assert_eq!(rules::outcome(&board), Outcome::Draw);
    assert_eq!(rules::utility(&board), 0);
    assert_eq!(moves, 9, "a perfectly played game fills the board");
}

#[test]
fn test_self_play_with_search_context_is_a_draw() {
    let mut search = MinimaxSearch::new();
    let mut board = rules::initial_state();

    while !rules::terminal(&board) {
        let action = search
            .choose_action(&board)
            .expect("non-terminal board has a move");
        board = rules::result(&board, action).expect("engine picks legal moves");
    }

    assert_eq!(rules::outcome(&board), Outcome::Draw);
}

// =============================================================================
// Tactical Positions
// =============================================================================

#[test]
fn test_engine_completes_winning_row() {
    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));

    let after = rules::result(&board, Action::new(0, 2)).unwrap();
    assert_eq!(rules::outcome(&after), Outcome::Winner(Mark::X));
}

#[test]
fn test_engine_blocks_immediate_threat() {
    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    // O to move; X threatens to complete the top row.
    let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]);
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));
}

// =============================================================================
// Robustness Against Imperfect Opponents
// =============================================================================

#[test]
fn test_engine_as_x_never_loses_to_random() {
    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = play_game(Mark::X, |board| random_move(&mut rng, board));
        assert!(
            !outcome.is_winner(Mark::O),
            "engine lost as X against random play (seed {seed}): {outcome}"
        );
    }
}

#[test]
fn test_engine_as_o_never_loses_to_random() {
    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = play_game(Mark::O, |board| random_move(&mut rng, board));
        assert!(
            !outcome.is_winner(Mark::X),
            "engine lost as O against random play (seed {seed}): {outcome}"
        );
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_separate_search_contexts_agree() {
    let mut board = rules::initial_state();

    // Walk a few plies of self-play, checking agreement at each step.
    for _ in 0..5 {
        let mut search1 = MinimaxSearch::new();
        let mut search2 = MinimaxSearch::new();

        let a1 = search1.choose_action(&board);
        let a2 = search2.choose_action(&board);
        assert_eq!(a1, a2);
        assert_eq!(a1, minimax(&board));

        let action = a1.expect("non-terminal board has a move");
        board = rules::result(&board, action).unwrap();
    }
}

#[test]
fn test_stale_action_is_rejected() {
    let board = rules::initial_state();
    let action = minimax(&board).unwrap();
    let next = rules::result(&board, action).unwrap();

    // Replaying the same action against the advanced board must fail.
    let err = rules::result(&next, action).unwrap_err();
    assert_eq!(err.action, action);
}
