//! Fail-hard negamax with alpha-beta pruning.

use crate::board::Move;
use crate::tt::BoundType;

use super::SearchContext;

impl SearchContext<'_> {
    /// Search to `depth` plies below this node and return the score together
    /// with the best move. Scores are clamped to `[alpha, beta]` (fail-hard).
    pub(crate) fn alphabeta(
        &mut self,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ply: usize,
    ) -> (i32, Option<Move>) {
        self.state.stats.nodes += 1;

        let key = self.board.hash();
        let probe = self.state.tt.probe(key, depth, alpha, beta);
        if let Some(score) = probe.score {
            return (score, probe.best_move);
        }

        if depth == 0 {
            return (self.quiesce(alpha, beta, 0), None);
        }

        let moves = self.board.generate_moves();
        if moves.is_empty() {
            // Checkmate scores -MATE, stalemate 0
            return (self.board.evaluate(), None);
        }

        let ordered = self.order_moves(&moves, probe.best_move, ply);

        let mut best_move = None;
        let mut bound = BoundType::UpperBound;

        for scored in ordered.iter() {
            let m = scored.mv;
            if self.should_stop() {
                break;
            }

            self.board.make_move(m);
            let (child_score, _) = self.alphabeta(depth - 1, -beta, -alpha, ply + 1);
            let val = -child_score;
            self.board.unmake_move();

            if val >= beta {
                self.state.killers.update(ply, m);
                if !self.stopped {
                    self.state
                        .tt
                        .store(key, depth, beta, BoundType::LowerBound, Some(m));
                }
                return (beta, Some(m));
            }
            if val > alpha {
                alpha = val;
                best_move = Some(m);
                bound = BoundType::Exact;
            }
        }

        if !self.stopped {
            self.state.tt.store(key, depth, alpha, bound, best_move);
        }
        (alpha, best_move)
    }
}
