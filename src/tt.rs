//! Transposition table for caching search results.
//!
//! Keyed by the full 64-bit Zobrist hash. Entries are replaced only by
//! searches of equal or greater depth; on overflow of the configured entry
//! budget the whole table is cleared, which is cheap and never wrong.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::mem;

use crate::board::Move;

/// Kind of bound a stored score represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    /// Score is the exact value
    Exact,
    /// Score is at least this value (a beta cutoff occurred)
    LowerBound,
    /// Score is at most this value (no move raised alpha)
    UpperBound,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TTEntry {
    depth: u32,
    score: i32,
    bound: BoundType,
    best_move: Option<Move>,
}

/// Result of probing the table.
#[derive(Clone, Copy, Debug, Default)]
pub struct TTProbe {
    /// A score usable at the requested depth and window, if any.
    pub score: Option<i32>,
    /// The stored best move, returned regardless of depth for move ordering.
    pub best_move: Option<Move>,
}

/// Bounded associative table keyed by Zobrist hash.
pub struct TranspositionTable {
    table: HashMap<u64, TTEntry>,
    max_entries: usize,
}

impl TranspositionTable {
    /// Create a table sized to roughly `size_mb` megabytes of entries.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<(u64, TTEntry)>();
        let max_entries = ((size_mb * 1024 * 1024) / entry_size).max(1024);
        TranspositionTable {
            table: HashMap::with_capacity(max_entries / 2),
            max_entries,
        }
    }

    /// Store a search result. On a key conflict the entry is overwritten only
    /// when the new depth is at least the stored depth.
    pub(crate) fn store(
        &mut self,
        key: u64,
        depth: u32,
        score: i32,
        bound: BoundType,
        best_move: Option<Move>,
    ) {
        let entry = TTEntry {
            depth,
            score,
            bound,
            best_move,
        };
        match self.table.entry(key) {
            Entry::Occupied(mut slot) => {
                if depth >= slot.get().depth {
                    slot.insert(entry);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }

        if self.table.len() > self.max_entries {
            self.clear();
        }
    }

    /// Probe for a stored result.
    ///
    /// The best move is handed back on any hit. The score is only usable when
    /// the stored depth covers the requested depth and the bound applies to
    /// the `[alpha, beta]` window.
    #[must_use]
    pub(crate) fn probe(&self, key: u64, depth: u32, alpha: i32, beta: i32) -> TTProbe {
        let Some(entry) = self.table.get(&key) else {
            return TTProbe::default();
        };

        let mut probe = TTProbe {
            score: None,
            best_move: entry.best_move,
        };

        if entry.depth >= depth {
            let usable = match entry.bound {
                BoundType::Exact => true,
                BoundType::LowerBound => entry.score >= beta,
                BoundType::UpperBound => entry.score <= alpha,
            };
            if usable {
                probe.score = Some(entry.score);
            }
        }

        probe
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
