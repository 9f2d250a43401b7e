//! Move generation and the legality filter.
//!
//! Generators produce pseudo-legal destination sets. The filter then tries
//! each destination on a copy of the board and keeps it only if the mover's
//! king is not attacked afterwards.

mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

/// Whether the side to move can continue, and if not, why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl Board {
    /// Pseudo-legal destinations for the piece on `from`, or nothing if the
    /// square is empty or holds an opposing piece.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square, side: Color) -> Bitboard {
        match self.piece_at(from) {
            Some((color, piece)) if color == side => match piece {
                Piece::Pawn => self.pawn_targets(from, side),
                Piece::Knight => self.knight_targets(from, side),
                Piece::King => self.king_targets(from, side),
                slider => self.slider_targets(from, side, slider),
            },
            _ => Bitboard::EMPTY,
        }
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Empty if the square is empty, holds an opponent's piece, or the piece
    /// has nowhere to go without exposing its own king.
    #[must_use]
    pub fn legal_moves(&self, from: Square, side: Color) -> Bitboard {
        let mut legal = Bitboard::EMPTY;
        let mut probe = self.snapshot();
        for to in self.pseudo_moves(from, side) {
            // The promotion piece cannot change whether the king is attacked.
            probe.apply_unchecked(from, to, Some(Piece::Queen));
            if !probe.in_check(side) {
                legal |= Bitboard::from_square(to);
            }
            probe.restore(*self);
        }
        legal
    }

    /// Every legal move for `side`, packed.
    ///
    /// Ordered by from-square, then to-square, with promotions expanded as
    /// queen, rook, bishop, knight. An empty list means the game is over; use
    /// [`Board::in_check`] or [`Board::game_status`] to tell mate from stalemate.
    #[must_use]
    pub fn all_legal_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        let promotion_rank = side.last_rank();
        for from in self.occupied_by(side) {
            let promotes = self.pieces(side, Piece::Pawn).contains(from);
            for to in self.legal_moves(from, side) {
                if promotes && to.rank() == promotion_rank {
                    for piece in PROMOTION_PIECES {
                        moves.push(Move::with_promotion(from, to, piece, side));
                    }
                } else {
                    moves.push(Move::new(from, to, side));
                }
            }
        }
        moves
    }

    /// Returns true if `side` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, side: Color) -> bool {
        self.occupied_by(side)
            .iter()
            .any(|from| !self.legal_moves(from, side).is_empty())
    }

    #[must_use]
    pub fn game_status(&self, side: Color) -> GameStatus {
        if self.has_legal_move(side) {
            GameStatus::Ongoing
        } else if self.in_check(side) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastlingRights;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn squares(bb: Bitboard) -> Vec<String> {
        bb.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_start_position_counts() {
        let board = Board::new();
        assert_eq!(board.all_legal_moves(Color::White).len(), 20);
        assert_eq!(board.all_legal_moves(Color::Black).len(), 20);
        assert_eq!(squares(board.legal_moves(sq("g1"), Color::White)), ["f3", "h3"]);
        assert_eq!(squares(board.legal_moves(sq("e2"), Color::White)), ["e3", "e4"]);
    }

    #[test]
    fn test_wrong_side_or_empty_square() {
        let board = Board::new();
        assert!(board.legal_moves(sq("e7"), Color::White).is_empty());
        assert!(board.legal_moves(sq("e4"), Color::White).is_empty());
        assert!(board.legal_moves(sq("a1"), Color::White).is_empty());
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut board = Board::empty();
        board.put_piece(sq("e1"), Color::White, Piece::King);
        board.put_piece(sq("e2"), Color::White, Piece::Knight);
        board.put_piece(sq("e8"), Color::Black, Piece::Rook);
        board.put_piece(sq("a8"), Color::Black, Piece::King);
        assert!(board.pseudo_moves(sq("e2"), Color::White).popcount() > 0);
        assert!(board.legal_moves(sq("e2"), Color::White).is_empty());
    }

    #[test]
    fn test_move_order_is_deterministic() {
        let board = Board::new();
        let moves = board.all_legal_moves(Color::White);
        let keys: Vec<(usize, usize)> =
            moves.iter().map(|m| (m.from().index(), m.to().index())).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(moves[0].to_string(), "b1a3");
    }

    #[test]
    fn test_promotions_expand_in_order() {
        let mut board = Board::empty();
        board.put_piece(sq("b7"), Color::White, Piece::Pawn);
        board.put_piece(sq("h1"), Color::White, Piece::King);
        board.put_piece(sq("h8"), Color::Black, Piece::King);
        let moves: Vec<String> = board
            .all_legal_moves(Color::White)
            .iter()
            .filter(|m| m.from() == sq("b7"))
            .map(|m| m.to_string())
            .collect();
        assert_eq!(moves, ["b7b8q", "b7b8r", "b7b8b", "b7b8n"]);
    }

    #[test]
    fn test_castling_through_attack_is_refused() {
        let mut board = Board::empty();
        board.castling = CastlingRights::all();
        board.put_piece(sq("e1"), Color::White, Piece::King);
        board.put_piece(sq("h1"), Color::White, Piece::Rook);
        board.put_piece(sq("a1"), Color::White, Piece::Rook);
        board.put_piece(sq("e8"), Color::Black, Piece::King);
        board.put_piece(sq("f8"), Color::Black, Piece::Rook);

        let targets = board.legal_moves(sq("e1"), Color::White);
        assert!(!targets.contains(sq("g1")));
        assert!(targets.contains(sq("c1")));
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let mut board = Board::empty();
        board.castling = CastlingRights::all();
        board.put_piece(sq("e1"), Color::White, Piece::King);
        board.put_piece(sq("h1"), Color::White, Piece::Rook);
        board.put_piece(sq("e8"), Color::Black, Piece::Rook);
        board.put_piece(sq("a8"), Color::Black, Piece::King);
        assert!(board.in_check(Color::White));
        assert!(!board.legal_moves(sq("e1"), Color::White).contains(sq("g1")));
    }

    #[test]
    fn test_game_status() {
        // Fool's mate
        let mut board = Board::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            board.apply_move(sq(from), sq(to), None).unwrap();
        }
        assert_eq!(board.game_status(Color::White), GameStatus::Checkmate);
        assert!(board.all_legal_moves(Color::White).is_empty());

        let mut stalemate = Board::empty();
        stalemate.put_piece(sq("a8"), Color::Black, Piece::King);
        stalemate.put_piece(sq("b6"), Color::White, Piece::Queen);
        stalemate.put_piece(sq("h1"), Color::White, Piece::King);
        assert_eq!(stalemate.game_status(Color::Black), GameStatus::Stalemate);
        assert_eq!(stalemate.game_status(Color::White), GameStatus::Ongoing);
    }
}
