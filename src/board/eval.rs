//! Static evaluation: material, piece-square tables and an endgame king term.
//!
//! Scores are in centipawns from White's point of view and do not depend on
//! which side is to move.

use std::cmp::Ordering;

use super::pst;
use super::{Board, Color, Piece, SearchParams, Square};

const NON_PAWN: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

impl Board {
    /// Evaluate the position with the standard weights. Positive favors White.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_with(&SearchParams::STANDARD)
    }

    #[must_use]
    pub fn evaluate_with(&self, params: &SearchParams) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            let mut side = 0;
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece) {
                    side += piece.value() + pst::bonus(piece, color, sq);
                }
            }
            score += side * color.sign();
        }
        score + self.endgame_bonus(params)
    }

    /// Material for `color`, king excluded
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        Piece::ALL[..5]
            .iter()
            .map(|&piece| self.pieces(color, piece).popcount() as i32 * piece.value())
            .sum()
    }

    /// Knight, bishop, rook and queen material of both sides
    fn non_pawn_material(&self) -> i32 {
        NON_PAWN
            .iter()
            .map(|&piece| {
                let count = self.pieces(Color::White, piece).popcount()
                    + self.pieces(Color::Black, piece).popcount();
                count as i32 * piece.value()
            })
            .sum()
    }

    /// In the endgame, rewards the side with more material for pushing the
    /// other king toward a corner and walking its own king closer.
    fn endgame_bonus(&self, params: &SearchParams) -> i32 {
        if self.non_pawn_material() > params.endgame_threshold {
            return 0;
        }
        let (Some(white_king), Some(black_king)) = (
            self.king_square(Color::White),
            self.king_square(Color::Black),
        ) else {
            return 0;
        };

        let white = self.material(Color::White);
        let black = self.material(Color::Black);
        let (attacker, defender_king) = match white.cmp(&black) {
            Ordering::Greater => (Color::White, black_king),
            Ordering::Less => (Color::Black, white_king),
            Ordering::Equal => return 0,
        };

        let corner = (14 - corner_distance(defender_king)) * params.corner_weight;
        let proximity = (14 - manhattan(white_king, black_king)) * params.proximity_weight;
        (corner + proximity) * params.endgame_scale * attacker.sign()
    }
}

fn manhattan(a: Square, b: Square) -> i32 {
    (a.rank().abs_diff(b.rank()) + a.file().abs_diff(b.file())) as i32
}

/// Manhattan distance to the nearest corner
fn corner_distance(sq: Square) -> i32 {
    let rank = sq.rank().min(7 - sq.rank());
    let file = sq.file().min(7 - sq.file());
    (rank + file) as i32
}
