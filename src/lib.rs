//! Chess rules and search core.
//!
//! Tracks a bitboard position, generates legal moves, reads and writes FEN,
//! counts perft nodes and searches for a best move at a fixed depth.
//!
//! ```
//! use chess_core::{Board, Color};
//!
//! let board = Board::new();
//! assert_eq!(board.all_legal_moves(Color::White).len(), 20);
//! ```

/// Emits a `log` record when the `logging` feature is enabled. Without it the
/// arguments are only type-checked.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

pub mod board;

pub use board::{
    Bitboard, Board, CastlingRights, Color, GameStatus, Move, MoveKind, MoveList, Piece,
    SearchResult, SearchTask, Square,
};
