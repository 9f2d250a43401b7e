use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a position from FEN notation, returning the board and the side to
    /// move (White when the field is absent).
    ///
    /// Only the placement field is required. Castling letters that are absent
    /// mark the matching rook as moved. Halfmove and fullmove counters are
    /// checked for being numbers and otherwise ignored.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(FenError::Empty);
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let mut board = Board::empty();
        board.castling = CastlingRights::all();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_letter(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square::from_index(rank * 8 + file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let found = board.pieces(color, Piece::King).popcount();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        let side = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if let Some(castling) = parts.get(2) {
            board.castling = parse_castling(castling)?;
        }

        if let Some(&ep) = parts.get(3) {
            if ep != "-" {
                let square: Square = ep.parse().map_err(|_| FenError::InvalidEnPassant {
                    found: ep.to_string(),
                })?;
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(FenError::InvalidEnPassant {
                        found: ep.to_string(),
                    });
                }
                board.en_passant = Some(square);
            }
        }

        for counter in parts.iter().skip(4) {
            if counter.parse::<u32>().is_err() {
                return Err(FenError::InvalidCounter {
                    found: (*counter).to_string(),
                });
            }
        }

        Ok((board, side))
    }

    /// Replaces this position with the one described by `fen` and returns the
    /// side to move. On error the board is left unchanged.
    pub fn set_fen(&mut self, fen: &str) -> Result<Color, FenError> {
        let (board, side) = Board::from_fen(fen)?;
        *self = board;
        Ok(side)
    }

    /// Convert the position to FEN: placement, side, castling and en passant.
    ///
    /// Move counters are not tracked and are omitted.
    #[must_use]
    pub fn to_fen(&self, side: Color) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::from_index(rank * 8 + file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.fen_letter(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match side {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {}", rows.join("/"), active, castling, ep)
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q") and
    /// match it against `side`'s legal moves.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::{Board, Color};
    ///
    /// let board = Board::new();
    /// let mv = board.parse_uci_move("e2e4", Color::White).unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_uci_move(&self, uci: &str, side: Color) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            Some(c) => {
                let piece = Piece::from_letter(c)
                    .filter(|p| p.is_promotion_target())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(piece)
            }
            None => None,
        };

        self.legal_moves(from, side)
            .contains(to)
            .then(|| self.all_legal_moves(side))
            .and_then(|moves| {
                moves
                    .into_iter()
                    .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            })
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if let Some(c) = field.chars().find(|c| !matches!(c, 'K' | 'Q' | 'k' | 'q' | '-')) {
        return Err(FenError::InvalidCastling { char: c });
    }
    let mut rights = CastlingRights::all();
    for (color, kingside, queenside) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
        // No letter at all reads back as a moved king, which is what a king
        // walk leaves behind and what `to_fen` writes for it.
        match (field.contains(kingside), field.contains(queenside)) {
            (false, false) => rights.revoke_king(color),
            (true, false) => rights.revoke_rook(color, false),
            (false, true) => rights.revoke_rook(color, true),
            (true, true) => {}
        }
    }
    Ok(rights)
}

impl FromStr for Board {
    type Err = FenError;

    /// Parses the position part of a FEN; the side to move is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s).map(|(board, _)| board)
    }
}
