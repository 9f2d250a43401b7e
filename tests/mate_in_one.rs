use serde::Deserialize;

use chess_core::{Board, GameStatus};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    fen: String,
    solution: String,
}

fn load() -> ProblemSet {
    let data = include_str!("data/mate_in_one.json");
    serde_json::from_str(data).expect("invalid mate_in_one.json")
}

#[test]
fn solutions_are_mate() {
    for problem in load().problems {
        let (mut board, side) = Board::from_fen(&problem.fen).unwrap();
        let mv = board
            .parse_uci_move(&problem.solution, side)
            .unwrap_or_else(|e| panic!("{}: {e}", problem.fen));
        board
            .apply_move(mv.from(), mv.to(), mv.promotion())
            .unwrap();
        assert_eq!(
            board.game_status(side.opponent()),
            GameStatus::Checkmate,
            "{} {}",
            problem.fen,
            problem.solution
        );
    }
}

#[test]
fn search_finds_mate() {
    for problem in load().problems {
        let (mut board, side) = Board::from_fen(&problem.fen).unwrap();
        let best = board
            .find_best_move(2, side)
            .unwrap_or_else(|| panic!("no move for {}", problem.fen));
        assert_eq!(best.to_string(), problem.solution, "{}", problem.fen);

        board
            .apply_move(best.from(), best.to(), best.promotion())
            .unwrap();
        assert_eq!(board.game_status(side.opponent()), GameStatus::Checkmate);
    }
}
