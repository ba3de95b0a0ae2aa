//! Chess engine library implementing the UCI protocol.
//!
//! Provides a complete chess engine with:
//! - Mailbox (8x8 array) board representation with reversible make/unmake
//! - Legal move generation validated by perft
//! - Alpha-beta search with quiescence, killer moves, and move ordering
//! - Transposition table keyed by Zobrist hashes
//!
//! # Quick Start
//!
//! ```
//! use sable::board::{Board, find_best_move, SearchState, DEFAULT_TT_MB};
//! use std::sync::atomic::AtomicBool;
//!
//! // Create a new game from the starting position
//! let mut board = Board::new();
//!
//! // Generate all legal moves
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Find the best move (depth 4)
//! let mut state = SearchState::new(DEFAULT_TT_MB);
//! let stop = AtomicBool::new(false);
//! if let Some(best) = find_best_move(&mut board, &mut state, 4, &stop) {
//!     println!("Best move: {best}");
//! }
//! ```
//!
//! # Building Positions
//!
//! ```
//! use sable::board::Board;
//!
//! // From FEN notation
//! let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! assert!(!board.white_to_move());
//! ```
//!
//! # Making Moves
//!
//! ```
//! use sable::board::{Board, TerminalState};
//!
//! let mut board = Board::new();
//!
//! // Parse and make a UCI move
//! board.make_move_uci("e2e4").unwrap();
//! board.make_move_uci("e7e5").unwrap();
//!
//! assert_eq!(board.is_terminal(), TerminalState::Ongoing);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, and `Move`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Chess engines have intentionally similar names (score_mg/score_eg, etc.)
#![allow(clippy::similar_names)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod tt;
pub mod uci;

mod zobrist;
