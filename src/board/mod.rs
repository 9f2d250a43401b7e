//! Chess board representation and game logic.
//!
//! Uses bitboards with magic lookups for sliding pieces. Side to move is not
//! part of the position: every query takes the [`Color`] it is asked for.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let targets = board.legal_moves(e2, Color::White);
//! assert_eq!(targets.popcount(), 2);
//! ```

mod apply;
mod attack_tables;
mod error;
mod eval;
mod fen;
mod movegen;
mod perft;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use movegen::GameStatus;
pub use perft::PerftLog;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveKind, MoveList, MoveListIntoIter,
    Piece, Square,
};

pub use search::{SearchParams, SearchResult, SearchTask, Searcher, MATE_SCORE};

pub(crate) use types::PROMOTION_PIECES;

/// Builds the jump and magic attack tables up front.
///
/// Tables are otherwise built lazily on first use; call this at startup to keep
/// the one-off construction cost out of the first move generation.
pub fn init_tables() {
    attack_tables::init();
}
