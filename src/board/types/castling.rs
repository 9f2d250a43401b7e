//! Castling rights type.
//!
//! Rights are tracked as six "lost" bits, one per king and per rook. A bit is
//! set once its piece has moved or its home square has been captured on, and is
//! never cleared except by loading a new position.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const WHITE_KING_MOVED: u8 = 1 << 0;
pub(crate) const WHITE_KINGSIDE_ROOK_MOVED: u8 = 1 << 1;
pub(crate) const WHITE_QUEENSIDE_ROOK_MOVED: u8 = 1 << 2;
pub(crate) const BLACK_KING_MOVED: u8 = 1 << 3;
pub(crate) const BLACK_KINGSIDE_ROOK_MOVED: u8 = 1 << 4;
pub(crate) const BLACK_QUEENSIDE_ROOK_MOVED: u8 = 1 << 5;

const ALL_LOST: u8 = 0b11_1111;

/// Which castling moves are still available to each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Every right still held
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0)
    }

    /// Every right lost
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(ALL_LOST)
    }

    /// A right is held while neither the king nor the matching rook has moved.
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        let mask = Self::king_bit(color) | Self::rook_bit(color, kingside);
        self.0 & mask == 0
    }

    /// Returns true if `color` still has at least one right
    #[inline]
    #[must_use]
    pub const fn any(self, color: Color) -> bool {
        self.has(color, true) || self.has(color, false)
    }

    #[inline]
    pub(crate) fn revoke_king(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub(crate) fn revoke_rook(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::rook_bit(color, kingside);
    }

    /// Marks whatever piece starts on `sq` as moved. Called for both the source
    /// and the destination of every move, so a capture on a rook's corner
    /// revokes that rook's right too.
    #[inline]
    pub(crate) fn touch(&mut self, sq: Square) {
        self.0 |= match sq.index() {
            4 => WHITE_KING_MOVED,
            7 => WHITE_KINGSIDE_ROOK_MOVED,
            0 => WHITE_QUEENSIDE_ROOK_MOVED,
            60 => BLACK_KING_MOVED,
            63 => BLACK_KINGSIDE_ROOK_MOVED,
            56 => BLACK_QUEENSIDE_ROOK_MOVED,
            _ => 0,
        };
    }

    /// Raw lost bits (bit 0 white king moved ... bit 5 black queenside rook moved)
    #[inline]
    #[must_use]
    pub const fn lost_bits(self) -> u8 {
        self.0
    }

    /// Create from raw lost bits; bits above bit 5 are ignored
    #[inline]
    #[must_use]
    pub const fn from_lost_bits(value: u8) -> Self {
        CastlingRights(value & ALL_LOST)
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_KINGSIDE_ROOK_MOVED,
            (Color::White, false) => WHITE_QUEENSIDE_ROOK_MOVED,
            (Color::Black, true) => BLACK_KINGSIDE_ROOK_MOVED,
            (Color::Black, false) => BLACK_QUEENSIDE_ROOK_MOVED,
        }
    }
}
