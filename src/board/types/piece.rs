//! Piece kinds and sides.
//!
//! `Piece` also owns everything the rest of the crate needs to know about
//! promotion: which kinds a pawn may become, the order the generator offers
//! them in, and the two-bit code a packed [`Move`](super::Move) stores.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// FEN letters, indexed by `Piece as usize`
const LETTERS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];

/// Kind of piece, without its side. Discriminants index the board's piece sets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Promotion choices in the order moves are generated
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Reads a FEN letter of either case.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        LETTERS
            .iter()
            .position(|&l| l == lower)
            .map(|i| Piece::ALL[i])
    }

    /// Lowercase letter, as used for promotions in `e7e8q`
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        LETTERS[self.index()]
    }

    /// FEN letter: uppercase for White, lowercase for Black
    #[inline]
    #[must_use]
    pub const fn fen_letter(self, color: Color) -> char {
        match color {
            Color::White => self.letter().to_ascii_uppercase(),
            Color::Black => self.letter(),
        }
    }

    /// Centipawn value used by the evaluator. The king's value only keeps it
    /// out of material comparisons.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 320,
            Piece::Bishop => 330,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 20000,
        }
    }

    /// Knight, bishop, rook or queen
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }

    /// Two-bit promotion code of a packed move: 0 knight, 1 queen, 2 rook,
    /// 3 bishop. Kinds a pawn cannot become get the queen's code.
    #[inline]
    pub(crate) const fn promotion_code(self) -> u16 {
        match self {
            Piece::Knight => 0,
            Piece::Rook => 2,
            Piece::Bishop => 3,
            _ => 1,
        }
    }

    /// Inverse of [`Piece::promotion_code`]; only the low two bits are read.
    #[inline]
    pub(crate) const fn from_promotion_code(code: u16) -> Piece {
        match code & 0b11 {
            0 => Piece::Knight,
            1 => Piece::Queen,
            2 => Piece::Rook,
            _ => Piece::Bishop,
        }
    }
}

/// Side of a piece, and the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black. Turns White-relative scores into
    /// mover-relative ones.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank change of a pawn step
    #[inline]
    pub(crate) const fn forward(self) -> isize {
        self.sign() as isize
    }

    /// `rank` counted from this side's back rank, so 1 is the pawn start rank
    /// and 7 the promotion rank for both sides.
    #[inline]
    pub(crate) const fn relative_rank(self, rank: usize) -> usize {
        match self {
            Color::White => rank,
            Color::Black => 7 - rank,
        }
    }

    /// Absolute rank the king and rooks start on
    #[inline]
    pub(crate) const fn home_rank(self) -> usize {
        self.relative_rank(0)
    }

    /// Absolute rank this side's pawns promote on
    #[inline]
    pub(crate) const fn last_rank(self) -> usize {
        self.relative_rank(7)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}
