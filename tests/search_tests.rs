//! Search tests to verify the engine finds sensible moves in various positions.

use std::sync::atomic::AtomicBool;

use chess_core::board::{SearchParams, Searcher, MATE_SCORE};
use chess_core::{Board, Color};

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // The rook covers a2 and b1, so the king must take it
    let (board, side) = Board::from_fen("8/8/8/8/8/8/1r6/K6k w - - 0 1").unwrap();
    assert_eq!(board.all_legal_moves(side).len(), 1);
    let best = board.find_best_move(3, side).expect("Should find a move");
    assert_eq!(best.to_string(), "a1b2", "Only legal move should be Kxb2");
}

/// Test that search returns None for checkmate position
#[test]
fn no_move_in_checkmate() {
    let (board, side) =
        Board::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1").unwrap();
    assert!(board.in_check(side));
    assert!(board.find_best_move(3, side).is_none());
}

/// Test that search returns None and a draw score for stalemate
#[test]
fn no_move_in_stalemate() {
    let (board, side) = Board::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
    let result = Searcher::new().best_move(&board, 3, side);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

/// Test that the engine captures a hanging queen
#[test]
fn captures_free_queen() {
    let (board, side) =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/3q4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let best = board.find_best_move(2, side).expect("Should find a move");
    assert_eq!(best.to_string(), "e4d5");
}

/// Shorter mates score further from zero
#[test]
fn prefers_faster_mate() {
    let (board, side) = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let score = board.search(4, side);
    assert_eq!(score, MATE_SCORE + 3);
}

/// Custom parameters change the mate score
#[test]
fn custom_mate_score() {
    let params = SearchParams {
        mate_score: 50_000,
        ..SearchParams::default()
    };
    let (board, side) = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let result = Searcher::with_params(params).best_move(&board, 2, side);
    assert_eq!(result.score, 50_001);
}

/// Search does not mutate the caller's board
#[test]
fn search_leaves_board_untouched() {
    let board = Board::new();
    let before = board;
    let stop = AtomicBool::new(false);
    let result = board.find_best_move_with_stop(3, Color::White, &stop);
    assert!(result.best_move.is_some());
    assert!(!result.cancelled);
    assert_eq!(board, before);
    assert!(board
        .all_legal_moves(Color::White)
        .as_slice()
        .contains(&result.best_move.unwrap()));
}
