//! Board representation, move generation, and search.

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::MATE;
pub use search::{
    find_best_move, search, KillerTable, SearchResult, SearchState, SearchStats, DEFAULT_TT_MB,
};
pub use state::{Board, TerminalState, UnmakeInfo, START_FEN};
pub use types::{Color, Move, MoveList, Piece, Square};

pub(crate) use types::{
    castle_bit, castle_bit_index, file_to_index, rank_to_index, ScoredMoveList, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, EMPTY_MOVE, MAX_PLY, PROMOTION_PIECES,
};
