//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Each node copies the board, applies a move, recurses and restores the copy.
//! Moves are tried in generation order, so among equally scored root moves the
//! first one generated wins. A stop flag is checked between sibling moves.

mod constants;
mod params;
mod task;

use std::sync::atomic::{AtomicBool, Ordering};

use super::{Board, Color, Move};
use constants::INFINITY;

pub use constants::MATE_SCORE;
pub use params::SearchParams;
pub use task::SearchTask;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the mover's point of view
    pub score: i32,
    /// Positions visited
    pub nodes: u64,
    /// True if the search was stopped before every root move was examined
    pub cancelled: bool,
}

/// Runs searches with a fixed set of parameters and an optional stop flag.
pub struct Searcher<'a> {
    params: SearchParams,
    stop: Option<&'a AtomicBool>,
    nodes: u64,
}

impl Default for Searcher<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Searcher {
            params,
            stop: None,
            nodes: 0,
        }
    }

    /// Cancel cooperatively once `stop` becomes true.
    #[must_use]
    pub fn with_stop(mut self, stop: &'a AtomicBool) -> Self {
        self.stop = Some(stop);
        self
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Positions visited since this searcher was created
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn stopped(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Negamax value of the position for `side` within `(alpha, beta)`.
    ///
    /// Leaves return the static evaluation signed for `side`. A side with no
    /// legal move scores `-(mate_score + depth)` when in check and 0 otherwise.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        side: Color,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return board.evaluate_with(&self.params) * side.sign();
        }

        let moves = board.all_legal_moves(side);
        if moves.is_empty() {
            return if board.in_check(side) {
                -(self.params.mate_score + depth as i32)
            } else {
                0
            };
        }

        let mut best = -INFINITY;
        for mv in &moves {
            if self.stopped() {
                break;
            }
            let snapshot = board.snapshot();
            board.make_move(*mv);
            let score = -self.search(board, depth - 1, side.opponent(), -beta, -alpha);
            board.restore(snapshot);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// [`Searcher::best_move`] at the configured depth.
    pub fn run(&mut self, board: &Board, side: Color) -> SearchResult {
        self.best_move(board, self.params.depth, side)
    }

    /// Searches every root move to `depth` plies (at least one) and returns the
    /// first move reaching the best score.
    ///
    /// If stopped early, only root moves whose subtree finished are
    /// considered; when none finished the first legal move is returned.
    pub fn best_move(&mut self, board: &Board, depth: u32, side: Color) -> SearchResult {
        let depth = depth.max(1);
        let start_nodes = self.nodes;
        let moves = board.all_legal_moves(side);
        let mut board = board.snapshot();

        let mut best_move = None;
        let mut best_score = -INFINITY;
        let mut cancelled = false;
        for mv in &moves {
            if self.stopped() {
                cancelled = true;
                break;
            }
            let snapshot = board.snapshot();
            board.make_move(*mv);
            let score = -self.search(
                &mut board,
                depth - 1,
                side.opponent(),
                -INFINITY,
                -best_score,
            );
            board.restore(snapshot);
            if self.stopped() {
                cancelled = true;
                break;
            }

            if best_move.is_none() || score > best_score {
                best_move = Some(*mv);
                best_score = score;
            }
        }

        let score = match best_move {
            Some(_) => best_score,
            None if moves.is_empty() && board.in_check(side) => {
                -(self.params.mate_score + depth as i32)
            }
            None => 0,
        };
        let result = SearchResult {
            best_move: best_move.or_else(|| moves.as_slice().first().copied()),
            score,
            nodes: self.nodes - start_nodes,
            cancelled,
        };

        if cancelled {
            log_event!(
                debug,
                "search cancelled at depth {} after {} nodes",
                depth,
                result.nodes
            );
        } else {
            log_event!(
                debug,
                "depth {} best {:?} score {} nodes {}",
                depth,
                result.best_move,
                result.score,
                result.nodes
            );
        }
        result
    }
}

impl Board {
    /// Best move for `side` at `depth` plies with the standard parameters.
    ///
    /// Depth 0 is treated as 1. Returns `None` when `side` has no legal move.
    #[must_use]
    pub fn find_best_move(&self, depth: u32, side: Color) -> Option<Move> {
        Searcher::new().best_move(self, depth, side).best_move
    }

    /// Like [`Board::find_best_move`], stopping early once `stop` is set.
    #[must_use]
    pub fn find_best_move_with_stop(
        &self,
        depth: u32,
        side: Color,
        stop: &AtomicBool,
    ) -> SearchResult {
        Searcher::new().with_stop(stop).best_move(self, depth, side)
    }

    /// Negamax score of this position for `side` at `depth` plies.
    #[must_use]
    pub fn search(&self, depth: u32, side: Color) -> i32 {
        let mut board = self.snapshot();
        Searcher::new().search(&mut board, depth, side, -INFINITY, INFINITY)
    }

    /// Runs [`Board::find_best_move`] on a background thread over a copy of
    /// this board.
    #[must_use]
    pub fn spawn_search(&self, depth: u32, side: Color) -> SearchTask {
        SearchTask::spawn(*self, depth, side, SearchParams::default())
    }
}
