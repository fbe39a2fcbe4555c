//! Move generation.
//!
//! Generation is split in two halves that run side by side: the worker
//! thread produces pawn moves, king moves outside the endgame and the check
//! verdict, while the calling thread produces knight, slider and endgame
//! king moves. Castling is appended once the check verdict is known.
//! Generated lists are pseudo-legal; callers test own-king safety after
//! applying each move.

mod kings;
mod knights;
mod ordering;
mod pawns;
mod sliders;
pub(crate) mod worker;

pub(crate) use ordering::clamp_weight;

use self::sliders::SliderType;
use self::worker::{pawn_and_king_steps, WorkerReply, WorkerRequest};
use super::engine::Engine;
use super::types::{CheckType, Color, Step, BISHOP, KING, KNIGHT, QUEEN, ROOK};

impl Engine {
    /// Fill ply `ply` with its ordered pseudo-legal moves.
    ///
    /// Also records in the ply whether the side to move is in check. Below
    /// the root the verdict is reused from the previous move's annotation
    /// when that move is already known to give check.
    pub fn generate_steps(&mut self, ply: usize) {
        let (white, en_passant, castling) = {
            let pos = &self.stack[ply];
            (pos.white_move, pos.en_passant, pos.castling)
        };
        let need_check = ply == 0 || !self.stack[ply - 1].current().check.is_check();

        let request = self
            .worker
            .request(&self.board, white, en_passant, self.endgame, need_check);
        let pending = self.worker.dispatch(request);

        let mut main = std::mem::take(&mut self.scratch);
        main.clear();
        self.piece_steps(white, &mut main);

        let reply = match pending {
            Ok(()) => self.worker.collect(),
            Err(request) => Some(self.inline_reply(request)),
        };
        let WorkerReply { buffer, in_check } = match reply {
            Some(reply) => reply,
            None => {
                let request =
                    self.worker
                        .request(&self.board, white, en_passant, self.endgame, need_check);
                self.inline_reply(request)
            }
        };

        let check_on_table = match in_check {
            Some(check) => {
                if check && ply > 0 {
                    self.stack[ply - 1].current_mut().check = CheckType::Check;
                }
                check
            }
            None => true,
        };

        if !check_on_table {
            let side = Color::from_white_move(white);
            self.board.generate_castling_steps(side, castling, &mut main);
        }

        let pos = &mut self.stack[ply];
        pos.clear_moves();
        pos.check_on_table = check_on_table;
        for &step in main.iter().chain(buffer.iter()) {
            pos.push(step);
        }

        self.scratch = main;
        self.worker.recycle(buffer);

        self.weigh_steps(ply);
        self.stack[ply].sort_steps(ply == 0);
    }

    /// Run a worker request on the calling thread.
    fn inline_reply(&self, mut request: WorkerRequest) -> WorkerReply {
        let in_check = pawn_and_king_steps(&self.board, &mut request);
        WorkerReply {
            buffer: request.buffer,
            in_check,
        }
    }

    /// Knight, slider and endgame king moves, scanned from the mover's side.
    fn piece_steps(&self, white: bool, out: &mut Vec<Step>) {
        let sign = Color::from_white_move(white).sign();
        for ii in 0..64 {
            let idx = if white { ii } else { 63 - ii };
            let fig = self.board.get(idx) * sign;
            match fig {
                KNIGHT => self.board.generate_knight_steps(idx, out),
                BISHOP => self.board.generate_slider_steps(idx, SliderType::Bishop, out),
                ROOK => self.board.generate_slider_steps(idx, SliderType::Rook, out),
                QUEEN => self.board.generate_slider_steps(idx, SliderType::Queen, out),
                KING if self.endgame => self.board.generate_king_steps(idx, out),
                _ => {}
            }
        }
    }

    /// True if `step`, played at `ply`, leaves the mover's king attacked.
    pub(crate) fn exposes_king(&mut self, ply: usize, step: &Step) -> bool {
        let side = self.stack[ply].side();
        self.move_step(ply, step);
        let exposed = self.board.king_in_check(side);
        self.back_step(ply, step);
        exposed
    }

    /// Legal moves at `ply`, in generation order.
    pub fn legal_steps(&mut self, ply: usize) -> Vec<Step> {
        self.generate_steps(ply);
        let count = self.stack[ply].steps_count;
        let mut legal = Vec::with_capacity(count);
        for i in 0..count {
            let step = self.stack[ply].steps[i];
            if !self.exposes_king(ply, &step) {
                legal.push(step);
            }
        }
        legal
    }

    /// Side to move at ply 0 is in check and has no legal move.
    pub fn is_checkmate(&mut self) -> bool {
        self.legal_steps(0).is_empty() && self.stack[0].check_on_table
    }

    /// Side to move at ply 0 is not in check and has no legal move.
    pub fn is_stalemate(&mut self) -> bool {
        self.legal_steps(0).is_empty() && !self.stack[0].check_on_table
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        self.perft_at(0, depth)
    }

    fn perft_at(&mut self, ply: usize, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        self.generate_steps(ply);
        let count = self.stack[ply].steps_count;
        let mut nodes = 0;
        for i in 0..count {
            let step = self.stack[ply].steps[i];
            self.move_step(ply, &step);
            let side = self.stack[ply].side();
            if !self.board.king_in_check(side) {
                if depth == 1 {
                    nodes += 1;
                } else {
                    self.stack[ply].cur_step = i;
                    self.move_pos(ply, &step);
                    nodes += self.perft_at(ply + 1, depth - 1);
                }
            }
            self.back_step(ply, &step);
        }
        nodes
    }
}

