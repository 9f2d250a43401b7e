use super::super::attack_tables::knight_attacks;
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    pub(crate) fn knight_targets(&self, from: Square, color: Color) -> Bitboard {
        knight_attacks(from) & !self.occupied_by(color)
    }
}
