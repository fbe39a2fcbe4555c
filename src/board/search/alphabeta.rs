use super::constants::{INFINITY, MATE};
use super::context::SearchContext;
use crate::board::movegen::clamp_weight;
use crate::board::state::{MAX_DEPTH, NULL_STEP};
use crate::board::types::{CheckType, Step};

impl SearchContext<'_> {
    /// Fail-hard alpha-beta over the ply stack.
    ///
    /// The root move list must already be generated; deeper plies generate
    /// their own. Returns early with the score so far once the stop flag is
    /// raised, or the budget is exhausted within the first three plies.
    pub(super) fn alpha_beta(&mut self, ply: usize, mut alpha: i32, beta: i32, depth_left: i32) -> i32 {
        if depth_left <= 0 {
            let params = self.params();
            let mut depth = params.quiescence_depth;
            if ply > 0 && self.engine.stack[ply - 1].current().is_capture() {
                depth += params.quiescence_capture_bonus;
            }
            return self.quiescence(ply, alpha, beta, depth);
        }
        if ply + 1 >= MAX_DEPTH {
            return self.evaluate(ply);
        }

        if ply > 0 {
            self.engine.generate_steps(ply);
        }
        let in_check = self.engine.stack[ply].check_on_table;
        let after_quiet = ply > 0 && !self.engine.stack[ply - 1].current().is_capture();

        if self.try_null_move(ply, beta, depth_left, in_check, after_quiet) {
            return beta;
        }

        let params = self.params();
        if params.futility
            && ply > 4
            && !self.in_null
            && depth_left <= 2
            && !in_check
            && after_quiet
            && self.evaluate(ply) - params.futility_margin >= beta
        {
            return beta;
        }

        let side = self.engine.stack[ply].side();
        let mut score = -INFINITY;
        let count = self.engine.stack[ply].steps_count;
        for i in 0..count {
            let step = self.engine.stack[ply].steps[i];
            let mut ext = 0;
            if ply == 0 {
                self.seldepth = depth_left;
                if self.level < params.root_check_level && step.check.is_check() {
                    ext = params.root_check_extension;
                }
            }

            self.engine.move_step(ply, &step);
            if self.engine.board.king_in_check(side) {
                self.engine.back_step(ply, &step);
                continue;
            }

            self.engine.stack[ply].cur_step = i;
            self.engine.move_pos(ply, &step);

            let gives_check = self.engine.board.king_in_check(side.opponent());
            if ext == 0 && gives_check && depth_left == 1 && ply as i32 + depth_left <= self.level {
                ext = 1;
            }

            let mut tmp = if self.verify_reduced(ply, &step, alpha, gives_check) {
                self.lazy = true;
                let reduced = -self.alpha_beta(ply + 1, -beta, -alpha, depth_left - params.lazy_reduction);
                self.lazy = false;
                if reduced <= alpha {
                    alpha
                } else {
                    -self.alpha_beta(ply + 1, -beta, -alpha, depth_left - 1 + ext)
                }
            } else {
                -self.alpha_beta(ply + 1, -beta, -alpha, depth_left - 1 + ext)
            };

            self.engine.back_step(ply, &step);
            if self.repeated(ply) {
                tmp = 0;
            }
            score = score.max(tmp);
            self.engine.stack[ply].steps[i].weight = clamp_weight(tmp);

            if score > alpha {
                alpha = score;
                self.engine.stack[ply].best = Some(self.engine.stack[ply].steps[i]);
                if ply == 0 && self.level > 3 && self.report_best(depth_left) {
                    return alpha;
                }
            }
            if alpha >= beta {
                return alpha;
            }
            if self.stopped() || (ply < 3 && self.timed_out()) {
                return score;
            }
        }

        if score == -INFINITY {
            if ply > 0 && self.engine.stack[ply].check_on_table {
                score = -MATE + ply as i32;
                self.engine.stack[ply - 1].current_mut().check = CheckType::Checkmate;
            } else {
                score = 0;
            }
        }
        score
    }

    /// Pass the move and search the opponent with a null window.
    ///
    /// True if even that fails high.
    fn try_null_move(&mut self, ply: usize, beta: i32, depth_left: i32, in_check: bool, after_quiet: bool) -> bool {
        let params = self.params();
        if !params.null_move
            || ply < params.null_min_ply
            || self.in_null
            || depth_left <= 2
            || in_check
            || !after_quiet
        {
            return false;
        }

        let (white, castling, weights) = {
            let pos = &self.engine.stack[ply];
            (pos.white_move, pos.castling, (pos.weight_white, pos.weight_black, pos.weight_both))
        };
        let next = &mut self.engine.stack[ply + 1];
        next.white_move = !white;
        next.castling = castling;
        next.en_passant = 0;
        (next.weight_white, next.weight_black, next.weight_both) = weights;

        let pos = &mut self.engine.stack[ply];
        pos.cur_step = NULL_STEP;
        pos.steps[NULL_STEP] = Step::NULL;

        self.in_null = true;
        let null_score = -self.alpha_beta(ply + 1, -beta, -beta + 1, depth_left - params.null_reduction);
        self.in_null = false;
        null_score >= beta
    }

    /// A quiet move that already looks poor is first searched shallower.
    fn verify_reduced(&self, ply: usize, step: &Step, alpha: i32, gives_check: bool) -> bool {
        let params = self.params();
        params.lazy_eval
            && ply > 2
            && !self.lazy
            && !self.in_null
            && !step.is_capture()
            && !step.kind.is_promotion()
            && !gives_check
            && !self.engine.stack[0].current().check.is_check()
            && -self.evaluate(ply + 1) + params.lazy_margin <= alpha
    }
}
