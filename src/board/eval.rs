//! Static evaluation.

use super::pst::{pst_bonus, Phase};
use super::{Board, Piece, TerminalState};

pub(crate) use super::pst::piece_value;

/// Score for a checkmated side. Larger than any possible heuristic magnitude;
/// also serves as the search's infinity.
pub const MATE: i32 = 1_000_000;

/// Total non-king material below which the endgame tables apply.
const ENDGAME_MATERIAL_THRESHOLD: i32 = 1300;

impl Board {
    /// Detect the game phase: endgame when the queens are gone or almost all
    /// material has been traded.
    pub(crate) fn game_phase(&self) -> Phase {
        let mut queens = 0;
        let mut material = 0;
        for entry in &self.squares {
            if let Some((_, piece)) = entry {
                match piece {
                    Piece::Queen => {
                        queens += 1;
                        material += piece_value(Piece::Queen);
                    }
                    Piece::King => {}
                    _ => material += piece_value(*piece),
                }
            }
        }
        if queens == 0 || material < ENDGAME_MATERIAL_THRESHOLD {
            Phase::Endgame
        } else {
            Phase::Middlegame
        }
    }

    /// Static score from the side-to-move's perspective: material plus
    /// piece-square bonuses, own minus opponent's.
    #[must_use]
    pub fn heuristic(&self) -> i32 {
        let phase = self.game_phase();
        let us = self.side_to_move();

        let mut score = 0;
        for idx in 0..64 {
            if let Some((color, piece)) = self.squares[idx] {
                let value = piece_value(piece) + pst_bonus(piece, color, idx, phase);
                if color == us {
                    score += value;
                } else {
                    score -= value;
                }
            }
        }
        score
    }

    /// Full evaluation including terminal states, from the side-to-move's
    /// perspective: -MATE when mated, +MATE when the opponent is mated,
    /// 0 for any draw, otherwise the static heuristic.
    #[must_use]
    pub fn evaluate(&mut self) -> i32 {
        match self.is_terminal() {
            TerminalState::WhiteMated => {
                if self.white_to_move {
                    -MATE
                } else {
                    MATE
                }
            }
            TerminalState::BlackMated => {
                if self.white_to_move {
                    MATE
                } else {
                    -MATE
                }
            }
            TerminalState::StalemateDraw
            | TerminalState::FiftyMoveDraw
            | TerminalState::ThreefoldDraw => 0,
            TerminalState::Ongoing => self.heuristic(),
        }
    }
}
