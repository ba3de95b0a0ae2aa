use std::env;
use std::sync::atomic::AtomicBool;

use sable::board::{find_best_move, Board, SearchState, DEFAULT_TT_MB, START_FEN};
use sable::uci;

fn parse_board(args: &[String]) -> Board {
    let fen = if args.is_empty() {
        START_FEN.to_string()
    } else {
        args.join(" ")
    };
    match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN '{fen}': {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        // `sable perft <depth> [fen...]`
        Some("perft") => {
            let depth: usize = args
                .get(1)
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| {
                    eprintln!("usage: sable perft <depth> [fen]");
                    std::process::exit(1);
                });
            let mut board = parse_board(&args[2..]);
            println!("{}", board.perft(depth));
        }
        // `sable search <depth> [fen...]`
        Some("search") => {
            let depth: u32 = args
                .get(1)
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| {
                    eprintln!("usage: sable search <depth> [fen]");
                    std::process::exit(1);
                });
            let mut board = parse_board(&args[2..]);
            let mut state = SearchState::new(DEFAULT_TT_MB);
            let stop = AtomicBool::new(false);
            match find_best_move(&mut board, &mut state, depth, &stop) {
                Some(mv) => println!("{mv}"),
                None => println!("(none)"),
            }
        }
        _ => uci::run_uci_loop(),
    }
}
