//! Perft driver for checking move generation against reference counts.
//!
//! usage: perft <depth> [fen] [--divide] [--log <path>]

use std::env;
use std::fs::File;
use std::process;
use std::time::Instant;

use chess_core::board::{init_tables, PerftLog, START_FEN};
use chess_core::Board;

struct Options {
    depth: u32,
    fen: String,
    divide: bool,
    log: Option<String>,
}

fn usage() -> ! {
    eprintln!("usage: perft <depth> [fen] [--divide] [--log <path>]");
    process::exit(2);
}

fn parse_args() -> Options {
    let mut args = env::args().skip(1);
    let depth = match args.next().map(|d| d.parse::<u32>()) {
        Some(Ok(depth)) => depth,
        _ => usage(),
    };

    let mut fen_parts: Vec<String> = Vec::new();
    let mut divide = false;
    let mut log = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--divide" => divide = true,
            "--log" => match args.next() {
                Some(path) => log = Some(path),
                None => usage(),
            },
            _ => fen_parts.push(arg),
        }
    }

    let fen = if fen_parts.is_empty() {
        START_FEN.to_string()
    } else {
        fen_parts.join(" ")
    };
    Options {
        depth,
        fen,
        divide,
        log,
    }
}

fn main() {
    let options = parse_args();
    init_tables();

    let (board, side) = match Board::from_fen(&options.fen) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("invalid fen '{}': {e}", options.fen);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let nodes = if let Some(path) = &options.log {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("cannot create {path}: {e}");
                process::exit(1);
            }
        };
        let log = PerftLog::new(file);
        match board.perft_with_log(options.depth, side, &log) {
            Ok(nodes) => nodes,
            Err(e) => {
                eprintln!("writing {path} failed: {e}");
                process::exit(1);
            }
        }
    } else if options.divide {
        let divide = board.perft_divide(options.depth, side);
        for (mv, count) in &divide {
            println!("{mv}: {count}");
        }
        divide.iter().map(|(_, n)| n).sum()
    } else {
        board.perft(options.depth, side)
    };
    let elapsed = start.elapsed();

    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!();
    println!("perft({}) = {}", options.depth, nodes);
    println!("time: {:.3}s ({:.0} nodes/s)", elapsed.as_secs_f64(), nps);
}
