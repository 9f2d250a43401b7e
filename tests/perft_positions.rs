//! Data-driven perft table.

use serde::Deserialize;

use chess_core::Board;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    /// Expected leaf counts at depth 1, 2, ...
    counts: Vec<u64>,
}

#[test]
fn perft_table() {
    let data = include_str!("data/perft_positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid perft_positions.json");
    assert!(!set.positions.is_empty());

    for position in &set.positions {
        let (board, side) = Board::from_fen(&position.fen)
            .unwrap_or_else(|e| panic!("{}: bad fen: {e}", position.name));
        for (depth, &expected) in (1u32..).zip(&position.counts) {
            assert_eq!(
                board.perft(depth, side),
                expected,
                "{} at depth {}",
                position.name,
                depth
            );
        }
    }
}

#[test]
fn divide_agrees_with_perft() {
    let data = include_str!("data/perft_positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid perft_positions.json");

    for position in &set.positions {
        let (board, side) = Board::from_fen(&position.fen).unwrap();
        let divide = board.perft_divide(2, side);
        assert_eq!(divide.len() as u64, position.counts[0], "{}", position.name);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, position.counts[1], "{}", position.name);
    }
}
