use super::super::attack_tables::pawn_attacks;
use super::super::{Bitboard, Board, Color, Piece, Square};

impl Board {
    /// Pushes, captures and en passant for a `color` pawn on `from`.
    pub(crate) fn pawn_targets(&self, from: Square, color: Color) -> Bitboard {
        let mut targets = Bitboard::EMPTY;
        let dir = color.forward();

        if let Some(single) = from.offset_rank(dir) {
            if self.is_empty(single) {
                targets |= Bitboard::from_square(single);
                if color.relative_rank(from.rank()) == 1 {
                    if let Some(double) = from.offset_rank(2 * dir) {
                        if self.is_empty(double) {
                            targets |= Bitboard::from_square(double);
                        }
                    }
                }
            }
        }

        let attacks = pawn_attacks(color, from);
        targets |= attacks & self.occupied_by(color.opponent());
        // The passed pawn must stand just beyond the target square.
        if let Some(ep) = self.en_passant {
            let passed = ep
                .offset_rank(-dir)
                .is_some_and(|sq| self.pieces(color.opponent(), Piece::Pawn).contains(sq));
            if passed && attacks.contains(ep) {
                targets |= Bitboard::from_square(ep);
            }
        }
        targets
    }
}
