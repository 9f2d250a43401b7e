use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Color, Piece, Square};

impl Board {
    /// Sliding targets for a bishop, rook or queen: every ray square up to and
    /// including the first blocker, minus own pieces.
    pub(crate) fn slider_targets(&self, from: Square, color: Color, slider: Piece) -> Bitboard {
        let occ = self.all_occupied;
        let attacks = match slider {
            Piece::Bishop => bishop_attacks(from, occ),
            Piece::Rook => rook_attacks(from, occ),
            Piece::Queen => queen_attacks(from, occ),
            _ => Bitboard::EMPTY,
        };
        attacks & !self.occupied_by(color)
    }
}
