//! Perft: counts the leaves of the legal move tree to a fixed depth.

use std::io::{self, BufWriter, Write};

use parking_lot::Mutex;

use super::{Board, Color, Move};

/// Buffered sink for [`Board::perft_with_log`].
///
/// A walk holds the lock for its whole duration, so two walks sharing one log
/// never interleave their lines.
pub struct PerftLog<W: Write> {
    sink: Mutex<BufWriter<W>>,
}

impl<W: Write> PerftLog<W> {
    pub fn new(inner: W) -> Self {
        PerftLog {
            sink: Mutex::new(BufWriter::new(inner)),
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.lock().flush()
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.sink
            .into_inner()
            .into_inner()
            .map_err(io::IntoInnerError::into_error)
    }
}

impl Board {
    /// Number of leaf positions `depth` plies below this one with `side` to
    /// move. Depth 0 counts the position itself.
    #[must_use]
    pub fn perft(&self, depth: u32, side: Color) -> u64 {
        let mut board = self.snapshot();
        let nodes = count(&mut board, depth, side);
        log_event!(debug, "perft depth {} nodes {}", depth, nodes);
        nodes
    }

    /// Leaf counts below each root move, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: u32, side: Color) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let mut board = self.snapshot();
        let divide: Vec<(Move, u64)> = self
            .all_legal_moves(side)
            .into_iter()
            .map(|mv| {
                board.make_move(mv);
                let nodes = count(&mut board, depth - 1, side.opponent());
                board.restore(*self);
                (mv, nodes)
            })
            .collect();
        log_event!(
            debug,
            "perft divide depth {} over {} moves, {} nodes",
            depth,
            divide.len(),
            divide.iter().map(|(_, n)| n).sum::<u64>()
        );
        divide
    }

    /// Like [`Board::perft`], also writing one line per leaf: the moves leading
    /// to it in long algebraic form, separated by spaces.
    pub fn perft_with_log<W: Write>(
        &self,
        depth: u32,
        side: Color,
        log: &PerftLog<W>,
    ) -> io::Result<u64> {
        let mut out = log.sink.lock();
        let mut board = self.snapshot();
        let mut path = String::new();
        let nodes = count_logged(&mut board, depth, side, &mut path, &mut *out)?;
        out.flush()?;
        log_event!(debug, "perft depth {} nodes {} (logged)", depth, nodes);
        Ok(nodes)
    }
}

fn count(board: &mut Board, depth: u32, side: Color) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.all_legal_moves(side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let snapshot = board.snapshot();
        board.make_move(mv);
        nodes += count(board, depth - 1, side.opponent());
        board.restore(snapshot);
    }
    nodes
}

fn count_logged<W: Write>(
    board: &mut Board,
    depth: u32,
    side: Color,
    path: &mut String,
    out: &mut W,
) -> io::Result<u64> {
    if depth == 0 {
        writeln!(out, "{path}")?;
        return Ok(1);
    }

    let mut nodes = 0;
    for mv in board.all_legal_moves(side) {
        let len = path.len();
        if len > 0 {
            path.push(' ');
        }
        path.push_str(&mv.to_string());

        let snapshot = board.snapshot();
        board.make_move(mv);
        nodes += count_logged(board, depth - 1, side.opponent(), path, out)?;
        board.restore(snapshot);

        path.truncate(len);
    }
    Ok(nodes)
}
