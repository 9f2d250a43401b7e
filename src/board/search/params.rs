/// Tunable search and evaluation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched by [`Searcher::run`](super::Searcher::run)
    pub depth: u32,
    /// Score of a side that has been checkmated, before the depth adjustment
    pub mate_score: i32,
    /// Combined knight, bishop, rook and queen material at or below which the
    /// endgame king heuristic applies
    pub endgame_threshold: i32,
    /// Bonus per step the defending king is closer to a corner
    pub corner_weight: i32,
    /// Bonus per step the kings are closer to each other
    pub proximity_weight: i32,
    /// Multiplier applied to the whole endgame term
    pub endgame_scale: i32,
}

impl SearchParams {
    pub const STANDARD: SearchParams = SearchParams {
        depth: 4,
        mate_score: super::constants::MATE_SCORE,
        endgame_threshold: 1300,
        corner_weight: 5,
        proximity_weight: 3,
        endgame_scale: 3,
    };
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams::STANDARD
    }
}
