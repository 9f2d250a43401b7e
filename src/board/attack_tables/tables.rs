//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Union of the on-board squares reached from `sq` by each (rank, file) delta.
fn jumps(sq: usize, deltas: &[(isize, isize)]) -> u64 {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut mask = 0u64;
    for &(dr, df) in deltas {
        let nr = r + dr;
        let nf = f + df;
        if (0..8).contains(&nr) && (0..8).contains(&nf) {
            mask |= 1u64 << (nr as usize * 8 + nf as usize);
        }
    }
    mask
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = jumps(sq, &KNIGHT_DELTAS);
    }
    attacks
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = jumps(sq, &KING_DELTAS);
    }
    attacks
});

/// Squares a pawn of each color attacks, indexed `[color][square]`.
/// Off-board diagonals are dropped, so a- and h-file pawns never wrap.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        attacks[0][sq] = jumps(sq, &[(1, -1), (1, 1)]);
        attacks[1][sq] = jumps(sq, &[(-1, -1), (-1, 1)]);
    }
    attacks
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_corner_and_center() {
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2); // a1
        assert_eq!(KNIGHT_ATTACKS[27].count_ones(), 8); // d4
        assert_eq!(KNIGHT_ATTACKS[0], (1 << 10) | (1 << 17));
    }

    #[test]
    fn test_king_edges() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(KING_ATTACKS[4].count_ones(), 5);
        assert_eq!(KING_ATTACKS[36].count_ones(), 8);
    }

    #[test]
    fn test_pawn_attacks_do_not_wrap() {
        // a2 pawn attacks b3 only
        assert_eq!(PAWN_ATTACKS[0][8], 1 << 17);
        // h7 black pawn attacks g6 only
        assert_eq!(PAWN_ATTACKS[1][55], 1 << 46);
        // nothing in front of the last rank
        assert_eq!(PAWN_ATTACKS[0][60], 0);
    }
}
