use super::{Bitboard, CastlingRights, Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess position: twelve piece bitboards, castling rights and the en passant
/// target.
///
/// `Board` is a plain `Copy` value. Side to move is not stored; every query and
/// move takes the [`Color`] it applies to. A copy of the board is a complete
/// snapshot, which is how tentative moves are undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.set_standard_position();
        board
    }

    /// A board with no pieces, no castling rights and no en passant target.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Resets this board to the standard starting position.
    pub fn set_standard_position(&mut self) {
        *self = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            self.set_piece(Square::from_index(file), Color::White, piece);
            self.set_piece(Square::from_index(8 + file), Color::White, Piece::Pawn);
            self.set_piece(Square::from_index(48 + file), Color::Black, Piece::Pawn);
            self.set_piece(Square::from_index(56 + file), Color::Black, piece);
        }
        self.castling = CastlingRights::all();
    }

    /// Places a piece, replacing whatever stood on the square.
    ///
    /// Intended for building positions; castling rights and the en passant
    /// target are left untouched.
    pub fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.clear_square(sq);
        self.set_piece(sq, color, piece);
    }

    /// Removes whatever stands on `sq`, returning it.
    pub fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let found = self.piece_at(sq);
        if let Some((color, piece)) = found {
            self.remove_piece(sq, color, piece);
        }
        found
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let keep = !Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] &= keep;
        self.occupied[color.index()] &= keep;
        self.all_occupied &= keep;
    }

    /// The piece on a square, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()].contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Squares holding `color`'s pieces of type `piece`
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Copy of the full position, for [`Board::restore`].
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Puts back a position taken with [`Board::snapshot`].
    #[inline]
    pub fn restore(&mut self, snapshot: Board) {
        *self = snapshot;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_layout() {
        let board = Board::new();
        assert_eq!(board.piece_at(sq("e1")), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(sq("h7")), Some((Color::Black, Piece::Pawn)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.occupied().popcount(), 32);
        assert_eq!(board.occupied_by(Color::White).popcount(), 16);
        assert_eq!(board.pieces(Color::White, Piece::Pawn), Bitboard(0xFF00));
        assert_eq!(board.castling_rights(), CastlingRights::all());
    }

    #[test]
    fn test_put_piece_replaces_occupant() {
        let mut board = Board::new();
        board.put_piece(sq("e2"), Color::Black, Piece::Knight);
        assert_eq!(board.piece_at(sq("e2")), Some((Color::Black, Piece::Knight)));
        assert!(!board.pieces(Color::White, Piece::Pawn).contains(sq("e2")));
        assert!(!board.occupied_by(Color::White).contains(sq("e2")));
        assert_eq!(board.occupied().popcount(), 32);
    }

    #[test]
    fn test_piece_sets_stay_disjoint() {
        let board = Board::new();
        let mut seen = Bitboard::EMPTY;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let set = board.pieces(color, piece);
                assert!((seen & set).is_empty());
                seen |= set;
            }
        }
        assert_eq!(seen, board.occupied());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut board = Board::new();
        let snap = board.snapshot();
        board.clear_square(sq("d1"));
        board.en_passant = Some(sq("e3"));
        assert_ne!(board, snap);
        board.restore(snap);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_and_king_square() {
        let mut board = Board::empty();
        assert_eq!(board.king_square(Color::White), None);
        board.set_standard_position();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
    }
}
