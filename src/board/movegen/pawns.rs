use super::super::{Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let push = color.pawn_push();
        let promotion_rank = color.pawn_promotion_rank();

        // Single push, with four promotions on the last rank
        if let Some(forward) = from.offset(push) {
            if self.is_empty_square(forward) {
                if forward.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, forward, promo));
                    }
                } else {
                    moves.push(Move::quiet(from, forward));

                    // Double push needs both squares empty
                    if from.rank() == color.pawn_start_rank() {
                        let double = from
                            .offset(2 * push)
                            .expect("double push target is on the board");
                        if self.is_empty_square(double) {
                            moves.push(Move::double_pawn_push(from, double));
                        }
                    }
                }
            }
        }

        // Diagonal captures; the file-delta check rejects edge wrap-around
        for capture_off in [push - 1, push + 1] {
            let Some(target) = from.offset(capture_off) else {
                continue;
            };
            if target.file_distance(from) != 1 {
                continue;
            }

            if let Some((target_color, _)) = self.piece_at(target) {
                if target_color != color {
                    if target.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::promotion_capture(from, target, promo));
                        }
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}
