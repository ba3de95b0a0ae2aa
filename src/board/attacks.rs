//! Attack detection.
//!
//! All probes walk square-index offsets. Every step checks the file delta
//! against the offset's expected span so a probe never wraps around the board
//! edge (h-file to a-file of the next rank).

use super::{Board, Color, Piece, Square};

/// Knight jump offsets. File delta from the origin must be <= 2.
pub(crate) const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// King step offsets. File delta must be <= 1.
pub(crate) const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Diagonal ray directions (bishop, queen).
pub(crate) const DIAGONAL_OFFSETS: [i32; 4] = [-9, -7, 7, 9];

/// Orthogonal ray directions (rook, queen).
pub(crate) const STRAIGHT_OFFSETS: [i32; 4] = [-8, -1, 1, 8];

impl Board {
    /// Locate the king of the given color.
    #[must_use]
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        for idx in 0..64 {
            if self.squares[idx] == Some((color, Piece::King)) {
                return Some(Square::from_index(idx));
            }
        }
        None
    }

    /// Returns true if the given color's king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king_sq = self
            .find_king(color)
            .expect("position has no king of the side being tested");
        self.is_square_attacked(king_sq, color.opponent())
    }

    /// Returns true if `sq` is attacked by any piece of color `by`.
    ///
    /// Tests in order: pawn diagonals, knight jumps, king adjacency,
    /// diagonal rays (bishop/queen), orthogonal rays (rook/queen).
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // A pawn of `by` attacks sq from one step behind it on an adjacent file.
        let pawn_from_offsets: [i32; 2] = match by {
            Color::White => [-7, -9],
            Color::Black => [7, 9],
        };
        for off in pawn_from_offsets {
            if let Some(from) = sq.offset(off) {
                if from.file_distance(sq) == 1
                    && self.piece_at(from) == Some((by, Piece::Pawn))
                {
                    return true;
                }
            }
        }

        for off in KNIGHT_OFFSETS {
            if let Some(from) = sq.offset(off) {
                if from.file_distance(sq) <= 2
                    && self.piece_at(from) == Some((by, Piece::Knight))
                {
                    return true;
                }
            }
        }

        for off in KING_OFFSETS {
            if let Some(from) = sq.offset(off) {
                if from.file_distance(sq) <= 1
                    && self.piece_at(from) == Some((by, Piece::King))
                {
                    return true;
                }
            }
        }

        if self.ray_attacked(sq, by, &DIAGONAL_OFFSETS, Piece::Bishop) {
            return true;
        }
        if self.ray_attacked(sq, by, &STRAIGHT_OFFSETS, Piece::Rook) {
            return true;
        }

        false
    }

    /// Walk each ray direction until blocked; the first piece met attacks iff
    /// it belongs to `by` and is a queen or the matching slider.
    fn ray_attacked(&self, sq: Square, by: Color, directions: &[i32; 4], slider: Piece) -> bool {
        for &dir in directions {
            let mut cur = sq;
            loop {
                let Some(next) = cur.offset(dir) else { break };
                if next.file_distance(cur) > 1 {
                    break; // wrapped across the board edge
                }
                match self.piece_at(next) {
                    Some((color, piece)) => {
                        if color == by && (piece == slider || piece == Piece::Queen) {
                            return true;
                        }
                        break;
                    }
                    None => cur = next,
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_attacks() {
        let board = Board::from_fen("8/8/8/8/4P3/8/8/K1k5 w - - 0 1");
        // e4 pawn attacks d5 and f5, not e5
        assert!(board.is_square_attacked(Square::new(4, 3), Color::White));
        assert!(board.is_square_attacked(Square::new(4, 5), Color::White));
        assert!(!board.is_square_attacked(Square::new(4, 4), Color::White));
    }

    #[test]
    fn test_pawn_attack_does_not_wrap() {
        // White pawn on h4 must not "attack" a5 via index wrap-around
        let board = Board::from_fen("8/8/8/8/7P/8/8/K1k5 w - - 0 1");
        assert!(board.is_square_attacked(Square::new(4, 6), Color::White)); // g5
        assert!(!board.is_square_attacked(Square::new(4, 0), Color::White)); // a5
    }

    #[test]
    fn test_knight_attacks_from_corner() {
        let board = Board::from_fen("8/8/8/8/8/8/8/N3K1k1 w - - 0 1");
        // Knight on a1 attacks exactly b3 and c2
        assert!(board.is_square_attacked(Square::new(2, 1), Color::White));
        assert!(board.is_square_attacked(Square::new(1, 2), Color::White));
        // The wrap-around candidates (g1, g2, h2 area) are not attacked by it
        assert!(!board.is_square_attacked(Square::new(1, 7), Color::White));
        assert!(!board.is_square_attacked(Square::new(0, 6), Color::White));
    }

    #[test]
    fn test_rook_ray_does_not_wrap() {
        // Rook on h1: attacks along the h-file and first rank, not a2
        let board = Board::from_fen("7k/8/8/8/8/8/8/K6R w - - 0 1");
        assert!(board.is_square_attacked(Square::new(0, 4), Color::White)); // e1
        assert!(board.is_square_attacked(Square::new(6, 7), Color::White)); // h7
        assert!(!board.is_square_attacked(Square::new(1, 0), Color::White)); // a2
    }

    #[test]
    fn test_sliding_ray_blocked() {
        let board = Board::from_fen("7k/8/8/8/3p4/8/1B6/K7 w - - 0 1");
        // Bishop b2 sees c3 and d4 (enemy pawn), but not e5 behind it
        assert!(board.is_square_attacked(Square::new(2, 2), Color::White));
        assert!(board.is_square_attacked(Square::new(3, 3), Color::White));
        assert!(!board.is_square_attacked(Square::new(4, 4), Color::White));
    }

    #[test]
    fn test_queen_attacks_both_directions() {
        let board = Board::from_fen("7k/8/8/8/3Q4/8/8/K7 w - - 0 1");
        assert!(board.is_square_attacked(Square::new(3, 0), Color::White)); // a4
        assert!(board.is_square_attacked(Square::new(7, 7), Color::White)); // h8
        assert!(board.is_square_attacked(Square::new(0, 0), Color::White)); // a1
    }

    #[test]
    fn test_in_check() {
        let board = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }
}
