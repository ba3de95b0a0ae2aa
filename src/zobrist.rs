//! Zobrist key tables.
//!
//! Process-wide, read-only after one-time initialization. The tables are
//! generated from a fixed seed so that hashes are reproducible across runs.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Piece, Square};

/// Seed for the key tables. Changing it invalidates every stored hash.
const ZOBRIST_SEED: u64 = 0x5AB1_E000_C0DE_D065;

pub(crate) struct Zobrist {
    /// Per-square keys, indexed `[color][piece][square]`.
    pub piece_keys: [[[u64; 64]; 6]; 2],
    /// XORed in when Black is to move.
    pub black_to_move: u64,
    /// One key per castling-right bit (WK, WQ, BK, BQ).
    pub castling_keys: [u64; 4],
    /// One key per en-passant target file.
    pub en_passant_keys: [u64; 8],
}

pub(crate) static ZOBRIST: Lazy<Zobrist> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_keys = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_keys {
        for piece in color.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let black_to_move = rng.gen();

    let mut castling_keys = [0u64; 4];
    for key in &mut castling_keys {
        *key = rng.gen();
    }

    let mut en_passant_keys = [0u64; 8];
    for key in &mut en_passant_keys {
        *key = rng.gen();
    }

    Zobrist {
        piece_keys,
        black_to_move,
        castling_keys,
        en_passant_keys,
    }
});

impl Zobrist {
    /// Key for a colored piece standing on a square.
    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    /// Key for the en-passant target file.
    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file()]
    }
}
