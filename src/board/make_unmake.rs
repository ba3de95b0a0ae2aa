//! Reversible move application.
//!
//! `make_move` pushes an undo record and the new Zobrist key; `unmake_move`
//! pops both. The hash is maintained incrementally and must stay identical to
//! a from-scratch recomputation at every step.

use crate::zobrist::ZOBRIST;

use super::{castle_bit, castle_bit_index, Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Square of the pawn removed by an en-passant capture: one rank behind
    /// the capture target, from the mover's point of view.
    fn en_passant_victim_square(to: Square, mover: Color) -> Square {
        let delta = match mover {
            Color::White => -8,
            Color::Black => 8,
        };
        Square::from_index((to.index() as i32 + delta) as usize)
    }

    /// Drop one castling right, updating the hash if it was set.
    fn clear_castling_right(&mut self, hash: &mut u64, color: Color, side: char) {
        let bit = castle_bit(color, side);
        if self.castling_rights & bit != 0 {
            self.castling_rights &= !bit;
            *hash ^= ZOBRIST.castling_keys[castle_bit_index(bit)];
        }
    }

    /// Apply a legal move.
    ///
    /// The caller must pass a move generated for this position; the search and
    /// the UCI layer both do. Every `make_move` must be matched by exactly one
    /// `unmake_move` before the board is reused by an outer scope.
    pub fn make_move(&mut self, m: Move) {
        let from = m.from();
        let to = m.to();
        let color = self.side_to_move();
        let (moving_color, moving_piece) = self
            .piece_at(from)
            .expect("make_move: from-square is empty");
        debug_assert_eq!(moving_color, color, "make_move: moving opponent's piece");

        let mut hash = self.hash;

        // Remove the captured piece first (en passant victims sit behind `to`)
        let captured = if m.is_en_passant() {
            let victim_sq = Self::en_passant_victim_square(to, color);
            let victim = self.piece_at(victim_sq);
            debug_assert_eq!(victim, Some((color.opponent(), Piece::Pawn)));
            if let Some((cap_color, cap_piece)) = victim {
                self.remove_piece(victim_sq);
                hash ^= ZOBRIST.piece(cap_color, cap_piece, victim_sq);
            }
            victim
        } else {
            let victim = self.piece_at(to);
            if let Some((cap_color, cap_piece)) = victim {
                self.remove_piece(to);
                hash ^= ZOBRIST.piece(cap_color, cap_piece, to);
            }
            victim
        };

        let undo = UnmakeInfo {
            mv: m,
            moved_piece: moving_piece,
            captured,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        // Halfmove clock resets on pawn moves and captures
        if moving_piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        // En-passant target: cleared every move, set on double pushes
        if let Some(old_ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(old_ep);
        }
        self.en_passant_target = None;
        if moving_piece == Piece::Pawn && from.index().abs_diff(to.index()) == 16 {
            let ep_sq = Square::from_index(usize::midpoint(from.index(), to.index()));
            self.en_passant_target = Some(ep_sq);
            hash ^= ZOBRIST.en_passant(ep_sq);
        }

        // Move the piece, replacing it with the promotion piece if any
        self.remove_piece(from);
        hash ^= ZOBRIST.piece(color, moving_piece, from);
        let placed = m.promotion_piece().unwrap_or(moving_piece);
        self.set_piece(to, color, placed);
        hash ^= ZOBRIST.piece(color, placed, to);

        // The rook hop is implicit in a castling move
        if m.is_castling() {
            let rank = to.rank();
            let (rook_from_file, rook_to_file) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(rank, rook_from_file);
            let rook_to = Square::new(rank, rook_to_file);
            debug_assert_eq!(self.piece_at(rook_from), Some((color, Piece::Rook)));
            self.remove_piece(rook_from);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_from);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_to);
        }

        // Castling rights: king move drops both, rook moves and rook captures
        // on home squares drop one
        if moving_piece == Piece::King {
            self.clear_castling_right(&mut hash, color, 'K');
            self.clear_castling_right(&mut hash, color, 'Q');
        } else if moving_piece == Piece::Rook {
            let back = color.back_rank();
            if from == Square::new(back, 0) {
                self.clear_castling_right(&mut hash, color, 'Q');
            } else if from == Square::new(back, 7) {
                self.clear_castling_right(&mut hash, color, 'K');
            }
        }
        if let Some((cap_color, Piece::Rook)) = captured {
            let back = cap_color.back_rank();
            if to == Square::new(back, 0) {
                self.clear_castling_right(&mut hash, cap_color, 'Q');
            } else if to == Square::new(back, 7) {
                self.clear_castling_right(&mut hash, cap_color, 'K');
            }
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.white_to_move = !self.white_to_move;
        hash ^= ZOBRIST.black_to_move;

        self.hash = hash;
        self.hash_history.push(hash);
        self.undo_stack.push(undo);
    }

    /// Undo the most recent move, restoring the position byte-for-byte.
    ///
    /// A no-op when no move has been made.
    pub fn unmake_move(&mut self) {
        let Some(undo) = self.undo_stack.pop() else {
            return;
        };

        self.hash_history.pop();
        self.hash = *self
            .hash_history
            .last()
            .expect("hash history lost its initial entry");

        self.white_to_move = !self.white_to_move;
        let color = self.side_to_move();

        let m = undo.mv;
        let from = m.from();
        let to = m.to();

        // Put the mover back (a promoted piece reverts to the pawn)
        self.remove_piece(to);
        self.set_piece(from, color, undo.moved_piece);

        if m.is_castling() {
            let rank = to.rank();
            let (rook_home_file, rook_hop_file) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            self.remove_piece(Square::new(rank, rook_hop_file));
            self.set_piece(Square::new(rank, rook_home_file), color, Piece::Rook);
        }

        if m.is_en_passant() {
            let victim_sq = Self::en_passant_victim_square(to, color);
            if let Some((cap_color, cap_piece)) = undo.captured {
                self.set_piece(victim_sq, cap_color, cap_piece);
            }
        } else if let Some((cap_color, cap_piece)) = undo.captured {
            self.set_piece(to, cap_color, cap_piece);
        }

        self.castling_rights = undo.previous_castling_rights;
        self.en_passant_target = undo.previous_en_passant_target;
        self.halfmove_clock = undo.previous_halfmove_clock;
        self.fullmove_number = undo.previous_fullmove_number;

        debug_assert_eq!(self.hash, self.calculate_hash());
    }
}
