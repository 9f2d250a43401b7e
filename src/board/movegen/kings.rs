use super::super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use super::super::{Bitboard, Board, Color, Piece, Square};

impl Board {
    /// King steps plus any castling moves available from the home square.
    pub(crate) fn king_targets(&self, from: Square, color: Color) -> Bitboard {
        let mut targets = king_attacks(from) & !self.occupied_by(color);

        let rank = color.home_rank() * 8;
        if from.index() != rank + 4 || !self.castling.any(color) {
            return targets;
        }

        let enemy = color.opponent();
        if self.is_square_attacked(from, enemy) {
            return targets;
        }
        let rooks = self.pieces(color, Piece::Rook);
        let at = |file: usize| Square::from_index(rank + file);

        if self.castling.has(color, true)
            && rooks.contains(at(7))
            && self.is_empty(at(5))
            && self.is_empty(at(6))
            && !self.is_square_attacked(at(5), enemy)
        {
            targets |= Bitboard::from_square(at(6));
        }
        if self.castling.has(color, false)
            && rooks.contains(at(0))
            && self.is_empty(at(1))
            && self.is_empty(at(2))
            && self.is_empty(at(3))
            && !self.is_square_attacked(at(3), enemy)
        {
            targets |= Bitboard::from_square(at(2));
        }
        targets
    }

    /// Returns true if any `attacker` piece attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // A pawn of the defending color on `square` would attack exactly the
        // squares an attacking pawn must stand on.
        let pawn_sources = pawn_attacks(attacker.opponent(), square);
        if !(self.pieces(attacker, Piece::Pawn) & pawn_sources).is_empty() {
            return true;
        }
        if !(self.pieces(attacker, Piece::Knight) & knight_attacks(square)).is_empty() {
            return true;
        }
        if !(self.pieces(attacker, Piece::King) & king_attacks(square)).is_empty() {
            return true;
        }

        let queens = self.pieces(attacker, Piece::Queen);
        let rook_like = self.pieces(attacker, Piece::Rook) | queens;
        if !(rook_attacks(square, self.all_occupied) & rook_like).is_empty() {
            return true;
        }
        let bishop_like = self.pieces(attacker, Piece::Bishop) | queens;
        !(bishop_attacks(square, self.all_occupied) & bishop_like).is_empty()
    }

    /// Returns true if `color`'s king is attacked. A side without a king is
    /// never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
