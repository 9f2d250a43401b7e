//! Background search that can be stopped from another thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::{SearchParams, SearchResult, Searcher};
use crate::board::{Board, Color};

/// Handle to a search running on its own thread.
pub struct SearchTask {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<SearchResult>,
}

impl SearchTask {
    pub(crate) fn spawn(board: Board, depth: u32, side: Color, params: SearchParams) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            Searcher::with_params(params)
                .with_stop(&flag)
                .best_move(&board, depth, side)
        });
        SearchTask { stop, handle }
    }

    /// Ask the search to stop. It finishes the current sibling loop iteration
    /// and then unwinds.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the search. `None` if the worker thread panicked.
    pub fn join(self) -> Option<SearchResult> {
        self.handle.join().ok()
    }
}
