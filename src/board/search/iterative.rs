use log::{debug, info};

use super::constants::{ILLEGAL, INFINITY, ROOT_CHECK_BONUS, ROOT_FIRST_BONUS, ROOT_UNSEARCHED, WON};
use super::context::SearchContext;
use super::log::ReportLine;
use super::{EndOfGame, SearchConfig, SearchIterationInfo, SearchOutcome};
use crate::board::engine::Engine;
use crate::board::movegen::clamp_weight;
use crate::board::state::MAX_DEPTH;
use crate::board::types::{CheckType, Step};

impl Engine {
    /// Pick a move for the side to move at ply 0.
    ///
    /// Deepens from the configured start level until the budget runs out,
    /// the stop flag is raised, a win is proven or the root best matches a
    /// filled best-move slot twice. The board is left as it was.
    pub fn solve(&mut self, config: &SearchConfig) -> SearchOutcome {
        self.nodes = 0;
        self.end_of_game = None;
        let root_white = self.stack[0].white_move;
        for ply in 1..MAX_DEPTH {
            let pos = &mut self.stack[ply];
            pos.white_move = if ply % 2 == 1 { !root_white } else { root_white };
            pos.en_passant = 0;
        }

        if self.board.insufficient_material() {
            return self.game_over(EndOfGame::Draw);
        }
        self.seed_weights(config.params.endgame_material);

        let legal = self.filter_root();
        if legal == 0 {
            let end = if self.stack[0].check_on_table {
                EndOfGame::Checkmate
            } else {
                EndOfGame::Stalemate
            };
            return self.game_over(end);
        }

        let mut ctx = SearchContext::new(self, config);
        ctx.deepen()
    }

    fn game_over(&mut self, end: EndOfGame) -> SearchOutcome {
        info!("game over: {end}");
        self.end_of_game = Some(end);
        SearchOutcome::GameOver(end)
    }

    /// Generate ply 0 and keep only legal moves, in order.
    ///
    /// Also sets the ply-0 check flag from the king's own position.
    fn filter_root(&mut self) -> usize {
        self.generate_steps(0);
        let side = self.stack[0].side();
        let count = self.stack[0].steps_count;
        let mut legal = 0;
        for i in 0..count {
            let step = self.stack[0].steps[i];
            let exposed = self.exposes_king(0, &step);
            self.stack[0].steps[i].weight = if exposed { ILLEGAL } else { 0 };
            if !exposed {
                legal += 1;
            }
        }
        self.stack[0].check_on_table = self.board.king_in_check(side);
        self.stack[0].sort_steps(true);
        self.stack[0].steps_count = legal;
        legal
    }
}

impl SearchContext<'_> {
    pub(super) fn deepen(&mut self) -> SearchOutcome {
        let params = self.params();
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut score = 0;
        let mut same_best = 0u32;
        let mut stable = 0u32;
        let mut previous_best: Option<Step> = None;
        self.level = params.start_level_for(self.config.time_limit_ms);
        for ply in 0..MAX_DEPTH {
            self.engine.stack[ply].best = None;
        }

        while self.level <= params.max_level {
            for ply in 1..MAX_DEPTH {
                self.engine.stack[ply].best = None;
            }
            self.order_root();

            score = self.alpha_beta(0, alpha, beta, self.level);

            let out = score >= beta || score <= alpha;
            if params.multi_pv || same_best > 2 || out {
                same_best = 0;
                alpha = -INFINITY;
                beta = INFINITY;
            } else {
                alpha = score - params.aspiration_window;
                beta = score + params.aspiration_window;
            }
            if self.budget_spent(0.2) && !out {
                self.stats = false;
                alpha = score - params.late_window;
                beta = score + params.late_window;
            }

            self.engine.stack[0].sort_steps(true);
            if self.report_best(self.level) || self.solved || score > WON {
                break;
            }
            if self.timed_out() || self.stopped() {
                break;
            }

            let best = self.engine.stack[0].best;
            if matches!((best, previous_best), (Some(b), Some(p)) if b.same_move(&p)) {
                same_best += 1;
                stable += 1;
            } else {
                same_best = 0;
                stable = 0;
            }
            previous_best = best;
            if params.stable_iterations.is_some_and(|n| stable >= n) {
                debug!("best move stable for {stable} iterations");
                break;
            }
            self.level += 1;
        }

        let root = &self.engine.stack[0];
        let step = root.best.unwrap_or(root.steps[0]);
        SearchOutcome::Move {
            step,
            score,
            depth: self.level.min(params.max_level),
            nodes: self.engine.nodes,
        }
    }

    /// Re-weigh root moves by a one-ply look, then reset their weights for
    /// the search.
    fn order_root(&mut self) {
        let side = self.engine.stack[0].side();
        let count = self.engine.stack[0].steps_count;
        for i in 0..count {
            let step = self.engine.stack[0].steps[i];
            self.engine.move_step(0, &step);
            let check = if self.engine.board.king_in_check(side.opponent()) {
                CheckType::Check
            } else {
                CheckType::None
            };
            self.engine.stack[0].cur_step = i;
            self.engine.move_pos(0, &step);
            let mut weight = i32::from(step.weight) - self.evaluate(1);
            if check.is_check() {
                weight += ROOT_CHECK_BONUS;
            }
            if step.is_capture() {
                weight -= i32::from(step.piece.abs());
            }
            self.engine.back_step(0, &step);

            let slot = &mut self.engine.stack[0].steps[i];
            slot.check = check;
            slot.weight = clamp_weight(weight);
        }

        let root = &mut self.engine.stack[0];
        if count > 0 {
            root.steps[0].weight = clamp_weight(i32::from(root.steps[0].weight) + ROOT_FIRST_BONUS);
        }
        root.sort_steps(true);
        for step in &mut root.steps[..count] {
            step.weight = ROOT_UNSEARCHED;
        }
    }

    /// Report the root best move found at depth `depth`.
    ///
    /// Returns true when the same move was already reported and it matches
    /// a filled best-move slot; the search is then solved.
    pub(super) fn report_best(&mut self, depth: i32) -> bool {
        if self.stopped() || self.timed_out() {
            return false;
        }
        let Some(best) = self.engine.stack[0].best else {
            return false;
        };
        let repeated = self
            .last_report
            .is_some_and(|(last, _)| last.same_move(&best));
        if repeated && self.last_report.is_some_and(|(_, d)| d == depth) {
            return false;
        }

        let mut solved = false;
        if repeated
            && self
                .engine
                .best_moves
                .iter()
                .flatten()
                .any(|slot| slot.same_move(&best))
        {
            solved = true;
            self.solved = true;
        }
        self.last_report = Some((best, depth));

        let elapsed = self.elapsed();
        let nodes = self.engine.nodes;
        let line = ReportLine {
            white_move: self.engine.stack[0].white_move,
            step: &best,
            depth,
            seldepth: self.seldepth,
            elapsed,
            nodes,
        }
        .to_string();
        debug!("{line}");

        if let Some(callback) = &self.config.info_callback {
            callback(&SearchIterationInfo {
                depth,
                seldepth: self.seldepth + 1,
                score: i32::from(best.weight),
                best,
                nodes,
                elapsed_ms: elapsed.as_millis() as u64,
                line,
            });
        }
        solved
    }
}
