//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

const FROM_MASK: u16 = 0x3F;
const TO_SHIFT: u16 = 6;
const PROMO_SHIFT: u16 = 12;
const PROMO_FLAG: u16 = 1 << 14;
const BLACK_FLAG: u16 = 1 << 15;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-13: promotion code, see `Piece::promotion_code`
/// - bit 14:     set for promotions
/// - bit 15:     side to move (1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a non-promoting move for `color`
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, color: Color) -> Self {
        let mut raw = from.index() as u16 | ((to.index() as u16) << TO_SHIFT);
        if let Color::Black = color {
            raw |= BLACK_FLAG;
        }
        Move(raw)
    }

    /// Create a promotion move. Pieces that cannot be promoted to are stored as queen.
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece, color: Color) -> Self {
        let code = piece.promotion_code() << PROMO_SHIFT;
        Move(Move::new(from, to, color).0 | PROMO_FLAG | code)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & FROM_MASK) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & FROM_MASK) as usize)
    }

    /// Side that makes this move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 & BLACK_FLAG != 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.0 & PROMO_FLAG != 0
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        if !self.is_promotion() {
            return None;
        }
        Some(Piece::from_promotion_code(self.0 >> PROMO_SHIFT))
    }

    /// Get the raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.fen_letter(Color::White))?;
        }
        if self.color() == Color::Black {
            write!(f, " black")?;
        }
        write!(f, ")")
    }
}

/// Long algebraic form: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}

/// What kind of move the applier executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MoveKind {
    Normal = 0,
    KingsideCastle = 1,
    QueensideCastle = 2,
    EnPassant = 3,
    Promotion = 4,
}

impl MoveKind {
    /// Integer discriminant: 0 normal, 1 kingside castle, 2 queenside castle,
    /// 3 en passant, 4 promotion.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_bit_layout() {
        let mv = Move::new(sq("e2"), sq("e4"), Color::White);
        assert_eq!(mv.as_u16(), 12 | (28 << 6));

        let black = Move::new(sq("e7"), sq("e5"), Color::Black);
        assert_eq!(black.as_u16() >> 15, 1);
        assert_eq!(black.color(), Color::Black);
        assert_eq!(black.promotion(), None);
    }

    #[test]
    fn test_promotion_codes() {
        let from = sq("a7");
        let to = sq("a8");
        let codes: Vec<u16> = [Piece::Knight, Piece::Queen, Piece::Rook, Piece::Bishop]
            .iter()
            .map(|&p| (Move::with_promotion(from, to, p, Color::White).as_u16() >> 12) & 0x3)
            .collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);

        for piece in [Piece::Knight, Piece::Queen, Piece::Rook, Piece::Bishop] {
            let mv = Move::with_promotion(from, to, piece, Color::White);
            assert_eq!(mv.promotion(), Some(piece));
            assert!(mv.is_promotion());
        }
    }

    #[test]
    fn test_display() {
        let mv = Move::with_promotion(sq("b2"), sq("a1"), Piece::Knight, Color::Black);
        assert_eq!(mv.to_string(), "b2a1n");
        assert_eq!(format!("{mv:?}"), "Move(b2a1=N black)");
    }

    #[test]
    fn test_move_kind_codes() {
        assert_eq!(MoveKind::Normal.code(), 0);
        assert_eq!(MoveKind::KingsideCastle.code(), 1);
        assert_eq!(MoveKind::QueensideCastle.code(), 2);
        assert_eq!(MoveKind::EnPassant.code(), 3);
        assert_eq!(MoveKind::Promotion.code(), 4);
    }
}
