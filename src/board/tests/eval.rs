//! Evaluation symmetry.

use crate::board::{Board, Color, Square};

/// Flip the board vertically and swap colours.
fn mirror(board: &Board) -> Board {
    let mut mirrored = Board::empty();
    for idx in 0..64 {
        let sq = Square::new(idx).unwrap();
        if let Some((color, piece)) = board.piece_at(sq) {
            mirrored.put_piece(sq.flip_vertical(), color.opponent(), piece);
        }
    }
    mirrored
}

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "8/8/8/3k4/8/8/8/R3K3 w - -",
];

#[test]
fn test_mirrored_position_negates_score() {
    for fen in POSITIONS {
        let (board, _) = Board::from_fen(fen).unwrap();
        let mirrored = mirror(&board);
        assert_eq!(
            mirrored.evaluate(),
            -board.evaluate(),
            "mirror symmetry broken for {fen}"
        );
    }
}

#[test]
fn test_mirror_is_an_involution() {
    let (board, _) = Board::from_fen(POSITIONS[1]).unwrap();
    let twice = mirror(&mirror(&board));
    assert_eq!(twice.to_fen(Color::White), board.to_fen(Color::White).replace("KQkq", "-"));
}

#[test]
fn test_evaluation_ignores_side_to_move() {
    let (white, _) = Board::from_fen("8/8/8/3k4/8/8/8/R3K3 w - -").unwrap();
    let (black, _) = Board::from_fen("8/8/8/3k4/8/8/8/R3K3 b - -").unwrap();
    assert_eq!(white.evaluate(), black.evaluate());
    assert!(white.evaluate() > 500);
}
