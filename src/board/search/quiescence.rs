use super::constants::{INFINITY, MATE};
use super::context::SearchContext;
use crate::board::attack_tables::KNIGHT_STEPS;
use crate::board::state::{Board, MAX_DEPTH};
use crate::board::types::{
    column, diag1, diag2, row, CheckType, Color, Step, BISHOP, KNIGHT, PAWN, QUEEN, ROOK,
};

/// How a move is treated by the quiescence filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Activity {
    /// Captures, promotions, advanced or king-touching pawn moves and
    /// direct knight checks; always searched.
    Forcing,
    /// Searched only if it turns out to give check.
    MaybeCheck,
    /// Cannot give check; skipped.
    Quiet,
}

impl Board {
    /// Classify `step`, not yet played, for quiescence.
    pub(crate) fn activity(&self, step: &Step) -> Activity {
        if step.is_capture() || step.kind.is_promotion() {
            return Activity::Forcing;
        }
        let mover = if step.piece > 0 {
            Color::White
        } else {
            Color::Black
        };
        let Some(king) = self.king_square(mover.opponent()) else {
            return Activity::Quiet;
        };
        let to = step.to as usize;
        let fig = step.piece.abs();

        let on_file = row(to) == row(king) || column(to) == column(king);
        let on_diagonal = diag1(to) == diag1(king) || diag2(to) == diag2(king);

        match fig {
            PAWN => {
                let (advanced, left, right) = match mover {
                    Color::White => (row(to) > 5, to.checked_sub(9), to.checked_sub(7)),
                    Color::Black => (row(to) < 4, Some(to + 7), Some(to + 9)),
                };
                let hits_king = (column(to) > 1 && left == Some(king))
                    || (column(to) < 8 && right == Some(king));
                if advanced || hits_king {
                    Activity::Forcing
                } else {
                    Activity::Quiet
                }
            }
            KNIGHT => {
                if KNIGHT_STEPS[to].iter().any(|&sq| sq as usize == king) {
                    Activity::Forcing
                } else {
                    Activity::MaybeCheck
                }
            }
            BISHOP if !on_diagonal => Activity::Quiet,
            ROOK if !on_file => Activity::Quiet,
            QUEEN if !on_diagonal && !on_file => Activity::Quiet,
            _ => Activity::MaybeCheck,
        }
    }
}

impl SearchContext<'_> {
    /// Search only forcing moves below the nominal horizon.
    ///
    /// Stand-pat applies when not in check. A move that checks with one
    /// ply of depth left buys one more ply while the stack has room.
    pub(super) fn quiescence(&mut self, ply: usize, mut alpha: i32, beta: i32, mut depth_left: i32) -> i32 {
        if depth_left <= 0 || ply + 1 >= MAX_DEPTH {
            self.seldepth = self.seldepth.max(ply as i32);
            return self.evaluate(ply);
        }

        let mut score = -INFINITY;
        self.engine.generate_steps(ply);
        let in_check = self.engine.stack[ply].check_on_table;

        if !in_check {
            score = self.evaluate(ply);
            alpha = alpha.max(score);
            if alpha >= beta {
                return alpha;
            }
        }

        let side = self.engine.stack[ply].side();
        let count = self.engine.stack[ply].steps_count;
        for i in 0..count {
            let step = self.engine.stack[ply].steps[i];
            let activity = if in_check {
                Activity::Forcing
            } else {
                self.engine.board.activity(&step)
            };
            if activity == Activity::Quiet {
                continue;
            }

            self.engine.move_step(ply, &step);
            let mut gives_check = false;
            if activity == Activity::MaybeCheck {
                gives_check = self.engine.board.slider_check(side.opponent());
                self.engine.stack[ply].steps[i].check = if gives_check {
                    CheckType::Check
                } else {
                    CheckType::None
                };
                if !gives_check {
                    self.engine.back_step(ply, &step);
                    continue;
                }
            }
            if self.engine.board.king_in_check(side) {
                self.engine.back_step(ply, &step);
                continue;
            }

            if gives_check && depth_left == 1 && ply < MAX_DEPTH - 1 {
                depth_left += 1;
            }

            self.engine.stack[ply].cur_step = i;
            self.engine.move_pos(ply, &step);
            let mut tmp = -self.quiescence(ply + 1, -beta, -alpha, depth_left - 1);
            self.engine.back_step(ply, &step);
            if self.repeated(ply) {
                tmp = 0;
            }

            score = score.max(tmp);
            if score > alpha {
                alpha = score;
                self.engine.stack[ply].best = Some(self.engine.stack[ply].steps[i]);
            }
            if alpha >= beta {
                return alpha;
            }
        }

        if score == -INFINITY && in_check && ply > 0 {
            score = -MATE + ply as i32;
            self.engine.stack[ply - 1].current_mut().check = CheckType::Checkmate;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::engine::Engine;

    fn classify(fen: &str, from: u8, to: u8) -> Activity {
        let mut engine = Engine::new();
        engine.try_load_fen(fen).unwrap();
        let board = engine.board();
        let step = Step::new(from, to, board.get(from as usize), board.get(to as usize));
        board.activity(&step)
    }

    #[test]
    fn captures_are_forcing() {
        // Nf3xe5 in the Petrov
        let fen = "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq -";
        assert_eq!(classify(fen, 45, 28), Activity::Forcing);
    }

    #[test]
    fn pawn_moves_near_the_black_king() {
        // white pawn e5-e6 with the black king on f7
        let fen = "8/5k2/8/4P3/8/8/8/4K3 w - -";
        assert_eq!(classify(fen, 28, 20), Activity::Forcing);
        // white pawn a3-a4 is quiet
        let fen = "8/5k2/8/8/8/P7/8/4K3 w - -";
        assert_eq!(classify(fen, 40, 32), Activity::Quiet);
    }

    #[test]
    fn black_pawn_checks_the_white_king() {
        // black pawn d5-d4, white king on e3
        let fen = "4k3/8/8/3p4/8/4K3/8/8 b - -";
        assert_eq!(classify(fen, 27, 35), Activity::Forcing);
        // black pawn a6-a5 stays quiet
        let fen = "4k3/8/p7/8/8/4K3/8/8 b - -";
        assert_eq!(classify(fen, 16, 24), Activity::Quiet);
    }

    #[test]
    fn sliders_off_the_king_lines_are_quiet() {
        // rook a1-a2 against king on h8: neither rank nor file
        let fen = "7k/8/8/8/8/8/8/R3K3 w - -";
        assert_eq!(classify(fen, 56, 48), Activity::Quiet);
        // rook a1-a8 lands on the king's rank
        assert_eq!(classify(fen, 56, 0), Activity::MaybeCheck);
        // knight g1-f3 forks nothing but may uncover a line
        let fen = "4k3/8/8/8/8/8/8/4K1N1 w - -";
        assert_eq!(classify(fen, 62, 45), Activity::MaybeCheck);
    }
}
