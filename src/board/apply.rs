//! Move applier.
//!
//! Moves are applied without any legality check. Callers either take moves from
//! the legality filter or accept whatever position an illegal move produces.

use super::error::MoveError;
use super::{Board, Color, Move, MoveKind, Piece, Square};

impl Board {
    /// Applies `from -> to`, relocating the castling rook, removing an en
    /// passant victim or promoting as needed, and reports which of those
    /// happened.
    ///
    /// The move is NOT checked for legality; take it from
    /// [`Board::legal_moves`] first. The only errors are a missing mover and an
    /// inconsistent promotion argument, and in those cases the board is left
    /// unchanged.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveKind, MoveError> {
        let (color, piece) = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceOnSquare { square: from })?;

        let promotes = piece == Piece::Pawn && to.rank() == color.last_rank();
        match promotion {
            Some(choice) if !choice.is_promotion_target() => {
                return Err(MoveError::InvalidPromotionPiece { piece: choice });
            }
            Some(choice) if !promotes => {
                return Err(MoveError::UnexpectedPromotion { piece: choice });
            }
            None if promotes => {
                return Err(MoveError::MissingPromotionChoice { square: to });
            }
            _ => {}
        }

        Ok(self.apply_unchecked(from, to, promotion))
    }

    /// Applies a packed move from the generator.
    #[inline]
    pub(crate) fn make_move(&mut self, mv: Move) -> MoveKind {
        self.apply_unchecked(mv.from(), mv.to(), mv.promotion())
    }

    /// Core of the applier. A pawn reaching the last rank without a choice
    /// becomes a queen.
    pub(crate) fn apply_unchecked(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> MoveKind {
        let Some((color, piece)) = self.piece_at(from) else {
            return MoveKind::Normal;
        };

        self.castling.touch(from);
        self.castling.touch(to);
        let en_passant = self.en_passant.take();

        if piece == Piece::King && from.rank() == to.rank() && from.file().abs_diff(to.file()) == 2
        {
            return self.castle(color, from, to);
        }

        if piece == Piece::Pawn && Some(to) == en_passant && from.file() != to.file() {
            let victim = Square::from_index(from.rank() * 8 + to.file());
            self.remove_piece(victim, color.opponent(), Piece::Pawn);
            self.remove_piece(from, color, Piece::Pawn);
            self.set_piece(to, color, Piece::Pawn);
            return MoveKind::EnPassant;
        }

        self.clear_square(to);
        self.remove_piece(from, color, piece);

        if piece == Piece::Pawn && to.rank() == color.last_rank() {
            self.set_piece(to, color, promotion.unwrap_or(Piece::Queen));
            return MoveKind::Promotion;
        }

        self.set_piece(to, color, piece);
        if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant = Some(Square::from_index((from.index() + to.index()) / 2));
        }
        MoveKind::Normal
    }

    fn castle(&mut self, color: Color, from: Square, to: Square) -> MoveKind {
        let rank = from.rank() * 8;
        let (kind, rook_from, rook_to) = if to.file() > from.file() {
            (MoveKind::KingsideCastle, rank + 7, rank + 5)
        } else {
            (MoveKind::QueensideCastle, rank, rank + 3)
        };

        self.remove_piece(from, color, Piece::King);
        self.set_piece(to, color, Piece::King);
        let rook_from = Square::from_index(rook_from);
        if self.pieces(color, Piece::Rook).contains(rook_from) {
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(Square::from_index(rook_to), color, Piece::Rook);
        }
        kind
    }
}
