//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece kind, then filtered by making
//! each move and rejecting those that leave the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Create a quiet or capture move depending on the target's occupancy.
    fn create_move(&self, from: Square, to: Square) -> Move {
        if self.piece_at(to).is_some() {
            Move::capture(from, to)
        } else {
            Move::quiet(from, to)
        }
    }

    fn generate_pseudo_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move();
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let Some((piece_color, piece)) = self.squares[idx] else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(sq, moves),
                Piece::Knight => self.generate_knight_moves(sq, moves),
                Piece::Bishop => self.generate_slider_moves(sq, SliderType::Bishop, moves),
                Piece::Rook => self.generate_slider_moves(sq, SliderType::Rook, moves),
                Piece::Queen => self.generate_slider_moves(sq, SliderType::Queen, moves),
                Piece::King => self.generate_king_moves(sq, moves),
            }
        }
    }

    /// Append all legal moves for the side to move into `out`, in no
    /// particular order.
    pub fn generate_moves_into(&mut self, out: &mut MoveList) {
        let mover = self.side_to_move();
        let mut pseudo = MoveList::new();
        self.generate_pseudo_moves(&mut pseudo);

        for m in &pseudo {
            self.make_move(*m);
            if !self.is_in_check(mover) {
                out.push(*m);
            }
            self.unmake_move();
        }
    }

    /// Generate all legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_into(&mut moves);
        moves
    }

    /// Generate legal captures and promotions only, for quiescence search.
    #[must_use]
    pub(crate) fn generate_tactical_moves(&mut self) -> MoveList {
        let mover = self.side_to_move();
        let mut pseudo = MoveList::new();
        self.generate_pseudo_moves(&mut pseudo);

        let mut tactical = MoveList::new();
        for m in &pseudo {
            if !m.is_capture() && !m.is_promotion() {
                continue;
            }
            self.make_move(*m);
            if !self.is_in_check(mover) {
                tactical.push(*m);
            }
            self.unmake_move();
        }
        tactical
    }

    /// Count leaf nodes of the move tree to a fixed depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }

        nodes
    }
}
