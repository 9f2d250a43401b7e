//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - validated board square (a1 = 0 ... h8 = 63)
//! - `Bitboard` - 64-bit square set
//! - `Move`, `MoveKind` and `MoveList` - packed moves and applier results
//! - `CastlingRights` - six "lost" bits for kings and rooks

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
