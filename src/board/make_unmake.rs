//! Applying and reverting moves.
//!
//! `move_step` and `back_step` only touch the board. `move_pos` derives the
//! next ply record (rights, en passant, weights) from a move that has
//! already been applied with `move_step`.

use super::engine::Engine;
use super::pst;
use super::types::{
    column, material, Color, MoveType, Step, FIG_WEIGHT, KING, NO_FIG, PAWN, ROOK,
};

/// Rook origin and destination of a castling move.
#[inline]
fn castle_rook_cells(kind: MoveType, white: bool) -> Option<(usize, usize)> {
    match (kind, white) {
        (MoveType::CastleKingside, true) => Some((63, 61)),
        (MoveType::CastleQueenside, true) => Some((56, 59)),
        (MoveType::CastleKingside, false) => Some((7, 5)),
        (MoveType::CastleQueenside, false) => Some((0, 3)),
        _ => None,
    }
}

/// Cell of the pawn removed by an en passant capture onto `to`.
#[inline]
fn en_passant_victim(to: usize, white: bool) -> usize {
    if white {
        to + 8
    } else {
        to - 8
    }
}

impl Engine {
    /// Play `step` on the board for the side to move at `ply`.
    pub fn move_step(&mut self, ply: usize, step: &Step) {
        let white = self.stack[ply].white_move;
        let side = Color::from_white_move(white);
        let from = step.from as usize;
        let to = step.to as usize;

        self.board.set(from, NO_FIG);
        self.board.set(to, step.piece);
        if step.piece.abs() == KING {
            self.board.set_king_square(side, to);
        }

        match step.kind {
            MoveType::EnPassant => self.board.set(en_passant_victim(to, white), NO_FIG),
            MoveType::CastleKingside | MoveType::CastleQueenside => {
                if let Some((rook_from, rook_to)) = castle_rook_cells(step.kind, white) {
                    self.board.set(rook_from, NO_FIG);
                    self.board.set(rook_to, side.sign() * ROOK);
                }
            }
            kind => {
                if let Some(fig) = kind.promotion_figure() {
                    self.board.set(to, side.sign() * fig);
                }
            }
        }
    }

    /// Undo `step`, which must be the last move applied at `ply`.
    pub fn back_step(&mut self, ply: usize, step: &Step) {
        let white = self.stack[ply].white_move;
        let side = Color::from_white_move(white);
        let from = step.from as usize;
        let to = step.to as usize;

        self.board.set(from, step.piece);
        self.board.set(to, step.captured);
        if step.piece.abs() == KING {
            self.board.set_king_square(side, from);
        }

        match step.kind {
            MoveType::EnPassant => {
                self.board.set(to, NO_FIG);
                self.board.set(en_passant_victim(to, white), step.captured);
            }
            MoveType::CastleKingside | MoveType::CastleQueenside => {
                if let Some((rook_from, rook_to)) = castle_rook_cells(step.kind, white) {
                    self.board.set(rook_to, NO_FIG);
                    self.board.set(rook_from, side.sign() * ROOK);
                }
            }
            _ => {}
        }
    }

    /// Derive ply `ply + 1` from ply `ply` and the applied `step`.
    ///
    /// Copies castling rights forward minus those the move forfeits, sets the
    /// en passant cell only when an enemy pawn could use it, and updates the
    /// material and positional accumulators incrementally.
    pub fn move_pos(&mut self, ply: usize, step: &Step) {
        let cur = &self.stack[ply];
        let white = cur.white_move;
        let side = Color::from_white_move(white);
        let mut castling = cur.castling;
        let (mut weight_white, mut weight_black, mut weight_both) =
            (cur.weight_white, cur.weight_black, cur.weight_both);

        let from = step.from as usize;
        let to = step.to as usize;

        if castling.any_for(side) {
            match (side, from) {
                (Color::White, 60) | (Color::Black, 4) => castling.remove_both(side),
                _ => castling.remove_for_rook_square(from),
            }
        }
        if step.is_capture() {
            castling.remove_for_rook_square(to);
        }

        let mut en_passant = 0;
        let double_push = if white {
            step.piece == PAWN && to + 16 == from
        } else {
            step.piece == -PAWN && to == from + 16
        };
        if step.kind == MoveType::Simple && double_push {
            let enemy_pawn = -side.sign() * PAWN;
            let beside = (column(to) > 1 && self.board.get(to - 1) == enemy_pawn)
                || (column(to) < 8 && self.board.get(to + 1) == enemy_pawn);
            if beside {
                en_passant = ((from + to) / 2) as u8;
            }
        }

        let promotion_gain = step
            .kind
            .promotion_figure()
            .map_or(0, |fig| FIG_WEIGHT[fig as usize] - FIG_WEIGHT[PAWN as usize]);
        let shift = pst::value(step.piece, self.endgame, to) - pst::value(step.piece, self.endgame, from);
        let taken = if step.is_capture() {
            pst::value(step.captured, false, to)
        } else {
            0
        };
        if white {
            weight_black -= material(step.captured);
            weight_white += promotion_gain;
            weight_both += shift + taken;
        } else {
            weight_white -= material(step.captured);
            weight_black += promotion_gain;
            weight_both -= shift + taken;
        }

        let next = &mut self.stack[ply + 1];
        next.white_move = !white;
        next.castling = castling;
        next.en_passant = en_passant;
        next.weight_white = weight_white;
        next.weight_black = weight_black;
        next.weight_both = weight_both;

        self.nodes += 1;
    }

    /// Play `step` at ply 0 for good; the resulting position becomes ply 0.
    pub fn commit_step(&mut self, step: &Step) {
        self.move_step(0, step);
        self.move_pos(0, step);
        self.stack.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_cells_per_wing() {
        assert_eq!(castle_rook_cells(MoveType::CastleKingside, true), Some((63, 61)));
        assert_eq!(castle_rook_cells(MoveType::CastleQueenside, false), Some((0, 3)));
        assert_eq!(castle_rook_cells(MoveType::Simple, true), None);
    }

    #[test]
    fn commit_hands_the_move_to_the_opponent() {
        let mut engine = Engine::new();
        let step = engine.resolve_notation(0, "e4").unwrap();
        engine.commit_step(&step);
        assert_eq!(
            engine.export_pos_to_fen(0),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -"
        );
        assert!(!engine.position(0).white_move);
    }

    #[test]
    fn en_passant_victim_is_behind_target() {
        // white takes on e6, black pawn sits on e5
        assert_eq!(en_passant_victim(20, true), 28);
        assert_eq!(en_passant_victim(44, false), 36);
    }
}
