//! Perft divide: per-root-move subtree counts for debugging move generation.
//!
//! Usage: `perft_divide <depth> [fen]`
//! Defaults to the starting position when no FEN is given.

use std::env;
use std::process::ExitCode;

use zugzwang::board::Position;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(depth) = args.first().and_then(|s| s.parse::<usize>().ok()) else {
        eprintln!("usage: perft_divide <depth> [fen]");
        return ExitCode::FAILURE;
    };

    let pos = if args.len() > 1 {
        match Position::from_fen(&args[1..].join(" ")) {
            Ok(pos) => pos,
            Err(err) => {
                eprintln!("bad FEN: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Position::new()
    };

    let mut total = 0u64;
    for &m in &pos.legal_moves() {
        let mut next = pos.clone();
        next.make_move(m);
        let nodes = if depth > 0 { next.perft(depth - 1) } else { 1 };
        total += nodes;
        println!("{}: {nodes}", m.uci());
    }
    println!();
    println!("Nodes searched: {total}");

    ExitCode::SUCCESS
}
