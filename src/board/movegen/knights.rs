use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        for off in KNIGHT_OFFSETS {
            let Some(to) = from.offset(off) else { continue };
            if to.file_distance(from) > 2 {
                continue;
            }
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                _ => moves.push(self.create_move(from, to)),
            }
        }
    }
}
