//! Static evaluation.
//!
//! Scores come from the weights carried in each ply record; the board is
//! only scanned when a search seeds them.

use super::engine::Engine;
use super::pst;
use super::state::Board;
use super::types::{column, material, row, BISHOP, KING, KNIGHT, NO_FIG, PAWN, QUEEN, ROOK};

/// How `Engine::evaluate` turns the ply weights into a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalMode {
    /// Material balance only.
    Material,
    /// Material plus positional balance, normalised by total material.
    Statistical { scale: i32, bias: i32 },
}

impl Engine {
    /// Score of ply `ply` for its side to move.
    #[must_use]
    pub fn evaluate(&self, ply: usize, mode: EvalMode) -> i32 {
        let pos = &self.stack[ply];
        let (ww, wb, both) = (pos.weight_white, pos.weight_black, pos.weight_both);
        match mode {
            EvalMode::Material => {
                if pos.white_move {
                    ww - wb
                } else {
                    wb - ww
                }
            }
            EvalMode::Statistical { scale, bias } => {
                let total = ww + wb + bias;
                if pos.white_move {
                    scale * (ww - wb + both) / total
                } else {
                    scale * (wb - ww - both) / total
                }
            }
        }
    }

    /// Rescan the board into the ply-0 weights and pick the endgame flag.
    ///
    /// Returns the total material on the board.
    pub(crate) fn seed_weights(&mut self, endgame_material: i32) -> i32 {
        let (mut white, mut black) = (0, 0);
        for &fig in self.board.cells() {
            if fig > 0 {
                white += material(fig);
            } else if fig < 0 {
                black += material(fig);
            }
        }
        self.endgame = white + black < endgame_material;

        let mut both = 0;
        for (idx, &fig) in self.board.cells().iter().enumerate() {
            if fig > 0 {
                both += pst::value(fig, self.endgame, idx);
            } else if fig < 0 {
                both -= pst::value(fig, self.endgame, idx);
            }
        }

        let root = &mut self.stack[0];
        root.weight_white = white;
        root.weight_black = black;
        root.weight_both = both;
        white + black
    }

    /// The last four moves up to `ply` each repeat the moves four and eight
    /// plies earlier.
    ///
    /// Only plies deeper than 12 carry enough history to be tested.
    #[must_use]
    pub fn is_repetition(&self, ply: usize) -> bool {
        if ply <= 12 {
            return false;
        }
        (0..4).all(|i| {
            let li = ply - i;
            let step = self.stack[li].current();
            step.same_squares(self.stack[li - 4].current())
                && step.same_squares(self.stack[li - 8].current())
        })
    }
}

impl Board {
    /// Neither side can possibly mate with the material left.
    ///
    /// Covers a lone minor piece, bishops that all stand on one colour
    /// of square, and one bishop each.
    #[must_use]
    pub fn insufficient_material(&self) -> bool {
        let (mut heavy, mut knights) = (0, 0);
        let (mut dark_bishops, mut light_bishops) = (0, 0);
        let (mut white_bishops, mut black_bishops) = (0, 0);

        for (idx, &fig) in self.cells().iter().enumerate() {
            match fig.abs() {
                NO_FIG | KING => {}
                PAWN | ROOK | QUEEN => heavy += 1,
                KNIGHT => knights += 1,
                BISHOP => {
                    if (column(idx) + row(idx)) % 2 == 0 {
                        dark_bishops += 1;
                    } else {
                        light_bishops += 1;
                    }
                    if fig > 0 {
                        white_bishops += 1;
                    } else {
                        black_bishops += 1;
                    }
                }
                _ => {}
            }
        }

        let bishops = dark_bishops + light_bishops;
        (knights == 1 && heavy + bishops == 0)
            || (bishops == 1 && heavy + knights == 0)
            || heavy + knights + dark_bishops == 0
            || heavy + knights + light_bishops == 0
            || (heavy + knights == 0 && white_bishops == 1 && black_bishops == 1)
    }
}
