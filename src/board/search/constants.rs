//! Search constants.

/// Magnitude of a checkmate score before the remaining-depth bonus. Shallower
/// mates keep more depth and so score further from zero.
pub const MATE_SCORE: i32 = 1_000_000;

/// Window bound; larger than any reachable score.
pub(crate) const INFINITY: i32 = i32::MAX / 2;
