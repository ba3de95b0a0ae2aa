use super::super::attacks::{DIAGONAL_OFFSETS, STRAIGHT_OFFSETS};
use super::super::{Board, MoveList, Square};

#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [i32] {
        match self {
            SliderType::Bishop => &DIAGONAL_OFFSETS,
            SliderType::Rook => &STRAIGHT_OFFSETS,
            SliderType::Queen => &[-9, -8, -7, -1, 1, 7, 8, 9],
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        for &dir in slider.directions() {
            let mut cur = from;
            loop {
                let Some(next) = cur.offset(dir) else { break };
                if next.file_distance(cur) > 1 {
                    break; // ray wrapped across the board edge
                }
                match self.piece_at(next) {
                    None => {
                        moves.push(self.create_move(from, next));
                        cur = next;
                    }
                    Some((target_color, _)) => {
                        if target_color != color {
                            moves.push(self.create_move(from, next));
                        }
                        break;
                    }
                }
            }
        }
    }
}
