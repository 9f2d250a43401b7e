//! Magic bitboard tables for rook and bishop attacks.
//!
//! For each square the relevant blockers are the ray squares short of the
//! board edge. Every blocker subset is hashed with `(subset * magic) >> shift`
//! into a per-square slice of one shared attack table. Construction checks the
//! constants below for destructive collisions and re-derives any that fail.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROOK_MAGICS: [u64; 64] = [
    0x068000814008b4a0, 0xffbfffdff7efdffd, 0x232000ac16a02028, 0x5490000442001110,
    0xbfeffe7bfcf5f9f7, 0xdfe7dff7faffff7b, 0xafefeff77fbdfff9, 0x4b00017282420100,
    0x000780084002a984, 0xffbff7dfbf6fe3be, 0xefffaffeef9ffdff, 0x448a002040b2002a,
    0x6ad97fd7fbff7fde, 0x7dfdfffdfef7efff, 0x0806000200010c68, 0x83ca800080014300,
    0x1008208000400199, 0x8002808020044004, 0x197a020040322180, 0x0710c2000a001122,
    0xe6d7fdffdffbf5ff, 0xffffbfeefdfc7fff, 0x858e34006a100f08, 0x4083a20002841043,
    0x0a4000c480008365, 0x180ca08100400508, 0x2150717010040800, 0x48001000a0040a18,
    0x908801190011001c, 0x10220082005c0810, 0x8268502400281302, 0x08a341820010490c,
    0x6effdff7afbfff3e, 0x6b21a010084000c3, 0xe090000880c5e000, 0xffeeffaffcfffbdf,
    0x0004807830010040, 0xffffeffbf7ff5fbf, 0x10d91210d4000308, 0x4088938502000444,
    0x860184a040544000, 0xfff7bff77df677ff, 0x33486280b2020041, 0x9310210470010018,
    0xffd9fefb23b1fffe, 0xffffeffdfffb7fdf, 0x3000c21d08040010, 0x008b00058c410016,
    0x800e8002a9400680, 0x59e2c4ae01008200, 0x11a110a0c2048200, 0x280083b000680080,
    0xa04008a014265001, 0x19c4088200010040, 0x000925082a303c00, 0x448221840ac90600,
    0xbdfffefbbddd7fff, 0xdbffff3fefd7bfff, 0xfdffffdfffbfafb5, 0xaffffeff9fefff57,
    0xbfeffffdf7fa9d6e, 0xfdffffe7fbfffeff, 0x6df7fff7fefdeffc, 0x41b3988401214702,
];

const ROOK_SHIFTS: [u8; 64] = [
    52, 52, 52, 52, 52, 52, 52, 52, 53, 53, 53, 54, 53, 53, 54, 53,
    53, 54, 54, 54, 53, 53, 54, 53, 53, 54, 53, 53, 54, 54, 54, 53,
    52, 54, 53, 53, 53, 53, 54, 53, 52, 53, 54, 54, 53, 53, 54, 53,
    53, 54, 54, 54, 53, 53, 54, 53, 52, 53, 53, 53, 53, 53, 53, 52,
];

const BISHOP_MAGICS: [u64; 64] = [
    0xe51ebb94fbe45bff, 0xc7b9f567ed8ffe7f, 0x19a8282157800224, 0x04d41401923c73be,
    0x480404a14244000d, 0x340e01fea0c933af, 0xffc3f989d57fe9ec, 0xf7ff3fdd6efbffff,
    0xe7f974f4f9d9f7f5, 0x222161180311c580, 0x62003808704081a0, 0x70425c0408830360,
    0x66e5e110419250cd, 0x8420220834154952, 0xede7f5adf8fdfffd, 0x7f7eea5f3d59bf5e,
    0x4478024050810631, 0x2a22030490025601, 0xd0e4044848002500, 0x518c08c801212289,
    0x1002004402111108, 0x5858102901009007, 0x2230a1c412051005, 0x142b042e41082700,
    0x882011ae8850a508, 0x274320c508181108, 0x080090048e040014, 0x508c00c01c0100b2,
    0x424300102b004000, 0x0490144022080230, 0x20c280b11c020814, 0x00020600c42c9212,
    0xf3bfc5c66b10122f, 0xa25801b000c42434, 0x500144a208900400, 0x6080140400780120,
    0x124c0b40100c0100, 0x7048004100909018, 0xe8781ec402008a01, 0x4d221a0600807284,
    0xed4ff5c4ea9b2418, 0x6d9fe6f7b7efdeb4, 0x433d610048044041, 0x00086a2018040300,
    0x214b14110c006200, 0x60d2241106001c0a, 0x2b7f1018f2ebfdcc, 0x783438008e252100,
    0xefbffd71eead7fff, 0xd597fe7d435f79ff, 0x9ffff7fb3d9c7377, 0x8910144620981000,
    0xe40d01a0208a40f9, 0xa63240b31425025c, 0x9effebf61dd769fb, 0x877fce36d752fa8e,
    0xeb5ffd776d5fdfbe, 0xd7fdfffebcf2deff, 0xd01801c04208900f, 0x830639ef5720980a,
    0xc9c018202182c400, 0x893b2d4094880e8c, 0xfbbefdf552eb5ae6, 0xfefffbfb7bdfddfb,
];

const BISHOP_SHIFTS: [u8; 64] = [
    58, 60, 59, 59, 59, 59, 60, 58, 60, 59, 59, 59, 59, 59, 59, 60,
    59, 59, 57, 57, 57, 57, 59, 59, 59, 59, 57, 55, 55, 57, 59, 59,
    59, 59, 57, 55, 55, 57, 59, 59, 59, 59, 57, 57, 57, 57, 59, 59,
    60, 60, 59, 59, 59, 59, 60, 60, 58, 60, 59, 59, 59, 59, 59, 58,
];

#[derive(Clone, Copy, Debug, Default)]
struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    #[inline(always)]
    fn index(&self, occupancy: u64) -> usize {
        self.offset + ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Per-square magic entries plus the attack sets they index into.
pub(crate) struct MagicTable {
    entries: [MagicEntry; 64],
    attacks: Vec<u64>,
}

impl MagicTable {
    #[inline(always)]
    pub(crate) fn attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.attacks[self.entries[square].index(occupancy)]
    }

    fn build(
        name: &str,
        directions: &[(isize, isize); 4],
        magics: &[u64; 64],
        shifts: &[u8; 64],
    ) -> Self {
        let mut entries = [MagicEntry::default(); 64];
        let mut attacks = Vec::new();

        for sq in 0..64 {
            let mask = relevant_mask(sq, directions);
            let patterns: Vec<(u64, u64)> = blocker_subsets(mask)
                .map(|blockers| (blockers, slide_attacks(sq, blockers, directions)))
                .collect();

            let mut magic = magics[sq];
            let mut shift = u32::from(shifts[sq]);
            let mut slots = vec![0u64; 1 << (64 - shift)];
            if !fill_slots(&mut slots, mask, magic, shift, &patterns) {
                log_event!(
                    warn,
                    "{} magic for square {} collides, searching for a replacement",
                    name,
                    sq
                );
                (magic, shift, slots) = find_magic(sq as u64, mask, &patterns);
            }

            entries[sq] = MagicEntry {
                mask,
                magic,
                shift,
                offset: attacks.len(),
            };
            attacks.extend_from_slice(&slots);
        }

        log_event!(debug, "built {} magic table with {} slots", name, attacks.len());
        MagicTable { entries, attacks }
    }
}

pub(crate) static ROOK_TABLE: Lazy<MagicTable> =
    Lazy::new(|| MagicTable::build("rook", &ROOK_DIRECTIONS, &ROOK_MAGICS, &ROOK_SHIFTS));

pub(crate) static BISHOP_TABLE: Lazy<MagicTable> = Lazy::new(|| {
    MagicTable::build(
        "bishop",
        &BISHOP_DIRECTIONS,
        &BISHOP_MAGICS,
        &BISHOP_SHIFTS,
    )
});

/// Ray squares from `sq` on an empty board, without the last square of each ray.
pub(crate) fn relevant_mask(sq: usize, directions: &[(isize, isize)]) -> u64 {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut mask = 0u64;
    for &(dr, df) in directions {
        let mut nr = r + dr;
        let mut nf = f + df;
        while (0..8).contains(&(nr + dr)) && (0..8).contains(&(nf + df)) {
            mask |= 1u64 << (nr * 8 + nf);
            nr += dr;
            nf += df;
        }
    }
    mask
}

/// Ray walk that stops at, and includes, the first occupied square in each direction.
pub(crate) fn slide_attacks(sq: usize, occupancy: u64, directions: &[(isize, isize)]) -> u64 {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut attacks = 0u64;
    for &(dr, df) in directions {
        let mut nr = r + dr;
        let mut nf = f + df;
        while (0..8).contains(&nr) && (0..8).contains(&nf) {
            let bit = 1u64 << (nr * 8 + nf);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            nr += dr;
            nf += df;
        }
    }
    attacks
}

/// Every subset of `mask`, starting with the empty set (carry-rippler order).
fn blocker_subsets(mask: u64) -> impl Iterator<Item = u64> {
    let mut next = Some(0u64);
    std::iter::from_fn(move || {
        let current = next?;
        let following = current.wrapping_sub(mask) & mask;
        next = (following != 0).then_some(following);
        Some(current)
    })
}

/// Writes every pattern's attack set into `slots`. Returns false on a
/// destructive collision (two patterns with different attacks on one slot).
/// Slider attack sets are never empty, so zero marks a free slot.
fn fill_slots(
    slots: &mut [u64],
    mask: u64,
    magic: u64,
    shift: u32,
    patterns: &[(u64, u64)],
) -> bool {
    slots.fill(0);
    for &(blockers, attacks) in patterns {
        let idx = ((blockers & mask).wrapping_mul(magic) >> shift) as usize;
        match slots[idx] {
            0 => slots[idx] = attacks,
            existing if existing == attacks => {}
            _ => return false,
        }
    }
    true
}

/// Seeded trial-and-error search for a collision-free magic at the minimal shift.
fn find_magic(seed: u64, mask: u64, patterns: &[(u64, u64)]) -> (u64, u32, Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let shift = 64 - mask.count_ones();
    let mut slots = vec![0u64; 1 << (64 - shift)];
    loop {
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }
        if fill_slots(&mut slots, mask, magic, shift, patterns) {
            return (magic, shift, slots);
        }
    }
}
