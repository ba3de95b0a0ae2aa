use super::super::attacks::KING_OFFSETS;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        for off in KING_OFFSETS {
            let Some(to) = from.offset(off) else { continue };
            if to.file_distance(from) > 1 {
                continue;
            }
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                _ => moves.push(self.create_move(from, to)),
            }
        }

        self.generate_castling_moves(from, color, moves);
    }

    /// Castling is emitted only when the right is set, king and rook stand on
    /// their home squares, the squares between them are empty, and none of the
    /// king's start, pass-through, and destination squares are attacked.
    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let back = color.back_rank();
        let king_home = Square::new(back, 4);
        if from != king_home {
            return;
        }
        let enemy = color.opponent();

        if self.has_castling_right(color, 'K')
            && self.piece_at(Square::new(back, 7)) == Some((color, Piece::Rook))
            && self.is_empty_square(Square::new(back, 5))
            && self.is_empty_square(Square::new(back, 6))
            && !self.is_square_attacked(king_home, enemy)
            && !self.is_square_attacked(Square::new(back, 5), enemy)
            && !self.is_square_attacked(Square::new(back, 6), enemy)
        {
            moves.push(Move::castle_kingside(king_home, Square::new(back, 6)));
        }

        if self.has_castling_right(color, 'Q')
            && self.piece_at(Square::new(back, 0)) == Some((color, Piece::Rook))
            && self.is_empty_square(Square::new(back, 1))
            && self.is_empty_square(Square::new(back, 2))
            && self.is_empty_square(Square::new(back, 3))
            && !self.is_square_attacked(king_home, enemy)
            && !self.is_square_attacked(Square::new(back, 3), enemy)
            && !self.is_square_attacked(Square::new(back, 2), enemy)
        {
            moves.push(Move::castle_queenside(king_home, Square::new(back, 2)));
        }
    }
}
