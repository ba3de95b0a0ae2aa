//! UCI protocol loop.
//!
//! A thin text adapter over `Board` and the search: position setup, fixed
//! depth search, and `bestmove` reporting. Time management is left to the GUI.

use std::io::{self, BufRead, Write};
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use crate::board::{find_best_move, Board, SearchState, DEFAULT_TT_MB};

const ENGINE_NAME: &str = concat!("Sable ", env!("CARGO_PKG_VERSION"));

/// Default search depth when `go` gives no limits.
const DEFAULT_DEPTH: u32 = 6;

/// Apply a `position` command: `position startpos | fen <fen> [moves ...]`.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    let mut i = 1;
    if i < parts.len() && parts[i] == "startpos" {
        *board = Board::new();
        i += 1;
    } else if i < parts.len() && parts[i] == "fen" {
        let end = (i + 7).min(parts.len());
        let fen = parts[i + 1..end].join(" ");
        match Board::try_from_fen(&fen) {
            Ok(b) => *board = b,
            Err(err) => {
                eprintln!("info string invalid fen: {err}");
                return;
            }
        }
        i = end;
    }

    if i < parts.len() && parts[i] == "moves" {
        i += 1;
        while i < parts.len() {
            if let Err(err) = board.make_move_uci(parts[i]) {
                eprintln!("info string {err}");
                return;
            }
            i += 1;
        }
    }
}

fn handle_go(board: &mut Board, state: &mut SearchState, parts: &[&str]) {
    let mut depth = DEFAULT_DEPTH;
    let mut i = 1;
    while i < parts.len() {
        if parts[i] == "depth" {
            if let Some(d) = parts.get(i + 1).and_then(|s| s.parse().ok()) {
                depth = d;
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    let stop = AtomicBool::new(false);
    let start = Instant::now();
    let best = find_best_move(board, state, depth, &stop);
    let elapsed = start.elapsed();

    let nodes = state.stats.nodes;
    let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
    println!(
        "info depth {depth} nodes {nodes} nps {nps} time {}",
        elapsed.as_millis()
    );

    match best {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove 0000"),
    }
}

/// Run the UCI loop until `quit` or end of input.
pub fn run_uci_loop() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut board = Board::new();
    let mut tt_mb = DEFAULT_TT_MB;
    let mut state = SearchState::new(tt_mb);

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                println!("id name {ENGINE_NAME}");
                println!("option name Hash type spin default {DEFAULT_TT_MB} min 1 max 1024");
                println!("uciok");
            }
            "isready" => println!("readyok"),
            "setoption" => {
                // setoption name Hash value <mb>
                if parts.len() >= 5 && parts[1] == "name" && parts[2] == "Hash" && parts[3] == "value"
                {
                    if let Some(mb) = parts[4].parse().ok().filter(|&mb| mb >= 1) {
                        tt_mb = mb;
                        state = SearchState::new(tt_mb);
                    }
                }
            }
            "ucinewgame" => {
                board = Board::new();
                state = SearchState::new(tt_mb);
            }
            "position" => parse_position_command(&mut board, &parts),
            "go" => handle_go(&mut board, &mut state, &parts),
            "perft" => {
                if let Some(depth) = parts.get(1).and_then(|s| s.parse().ok()) {
                    let start = Instant::now();
                    let nodes = board.perft(depth);
                    println!(
                        "info string perft({depth}) = {nodes} in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            "quit" => break,
            _ => {}
        }
        let _ = stdout.flush();
    }
}
