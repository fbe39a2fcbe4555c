use super::super::state::Board;
use super::super::types::{column, is_black, is_white, row, Figure, MoveType, Step, NO_FIG, PAWN};

impl Board {
    /// Pushes, double pushes, captures and promotions of the pawn on `from`.
    pub(crate) fn generate_pawn_steps(&self, from: usize, out: &mut Vec<Step>) {
        let fig = self.get(from);
        let white = fig == PAWN;
        // White pawns walk towards a8 (lower indices).
        let (ahead, left, right, start_row, last_row): (isize, isize, isize, i8, i8) = if white {
            (-8, -9, -7, 2, 7)
        } else {
            (8, 7, 9, 7, 2)
        };
        let enemy: fn(Figure) -> bool = if white { is_black } else { is_white };
        let target = |delta: isize| (from as isize + delta) as usize;

        let r = row(from);
        let col = column(from);
        // A pawn on its own far rank cannot move.
        if (white && r == 8) || (!white && r == 1) {
            return;
        }

        if r == last_row {
            if self.get(target(ahead)) == NO_FIG {
                push_promotions(out, Step::new(from as u8, target(ahead) as u8, fig, NO_FIG));
            }
            if col > 1 && enemy(self.get(target(left))) {
                let to = target(left);
                push_promotions(out, Step::new(from as u8, to as u8, fig, self.get(to)));
            }
            if col < 8 && enemy(self.get(target(right))) {
                let to = target(right);
                push_promotions(out, Step::new(from as u8, to as u8, fig, self.get(to)));
            }
            return;
        }

        let one = target(ahead);
        if self.get(one) == NO_FIG {
            out.push(Step::new(from as u8, one as u8, fig, NO_FIG));
            if r == start_row && self.get(target(2 * ahead)) == NO_FIG {
                out.push(Step::new(from as u8, target(2 * ahead) as u8, fig, NO_FIG));
            }
        }
        if col > 1 && enemy(self.get(target(left))) {
            let to = target(left);
            out.push(Step::new(from as u8, to as u8, fig, self.get(to)));
        }
        if col < 8 && enemy(self.get(target(right))) {
            let to = target(right);
            out.push(Step::new(from as u8, to as u8, fig, self.get(to)));
        }
    }

    /// En passant captures onto `ep` for the side to move.
    pub(crate) fn generate_en_passant_steps(&self, white: bool, ep: u8, out: &mut Vec<Step>) {
        let ep_idx = ep as usize;
        if ep == 0 || self.get(ep_idx) != NO_FIG {
            return;
        }
        // Capturing pawns stand one rank behind the target from their side.
        let (pawn, victim, left, right) = if white {
            (PAWN, -PAWN, ep_idx + 7, ep_idx + 9)
        } else {
            (-PAWN, PAWN, ep_idx.wrapping_sub(9), ep_idx.wrapping_sub(7))
        };
        let candidates = [(column(ep_idx) > 1, left), (column(ep_idx) < 8, right)];
        for (on_board, from) in candidates {
            if on_board && from < 64 && self.get(from) == pawn {
                out.push(Step::new(from as u8, ep, pawn, victim).with_kind(MoveType::EnPassant));
            }
        }
    }
}

fn push_promotions(out: &mut Vec<Step>, base: Step) {
    out.extend(MoveType::PROMOTIONS.iter().map(|&kind| base.with_kind(kind)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{KNIGHT, ROOK};
    use crate::board::Square;

    fn sq(name: &str) -> usize {
        name.parse::<Square>().unwrap().index()
    }

    #[test]
    fn white_pawn_from_start_row() {
        let mut board = Board::empty();
        board.set(sq("e2"), PAWN);
        board.set(sq("d3"), -KNIGHT);
        let mut out = Vec::new();
        board.generate_pawn_steps(sq("e2"), &mut out);
        let targets: Vec<u8> = out.iter().map(|s| s.to).collect();
        assert_eq!(targets, vec![sq("e3") as u8, sq("e4") as u8, sq("d3") as u8]);
        assert_eq!(out[2].captured, -KNIGHT);
    }

    #[test]
    fn blocked_double_push() {
        let mut board = Board::empty();
        board.set(sq("c7"), -PAWN);
        board.set(sq("c5"), ROOK);
        let mut out = Vec::new();
        board.generate_pawn_steps(sq("c7"), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to as usize, sq("c6"));
    }

    #[test]
    fn promotions_in_fixed_order() {
        let mut board = Board::empty();
        board.set(sq("a7"), PAWN);
        board.set(sq("b8"), -ROOK);
        let mut out = Vec::new();
        board.generate_pawn_steps(sq("a7"), &mut out);
        assert_eq!(out.len(), 8);
        let kinds: Vec<MoveType> = out.iter().take(4).map(|s| s.kind).collect();
        assert_eq!(kinds, MoveType::PROMOTIONS.to_vec());
        assert!(out[4..].iter().all(|s| s.captured == -ROOK));
    }

    #[test]
    fn en_passant_from_both_sides() {
        let mut board = Board::empty();
        board.set(sq("d5"), PAWN);
        board.set(sq("f5"), PAWN);
        board.set(sq("e5"), -PAWN);
        let mut out = Vec::new();
        board.generate_en_passant_steps(true, sq("e6") as u8, &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|s| s.kind == MoveType::EnPassant && s.captured == -PAWN));
    }

    #[test]
    fn en_passant_does_not_wrap_files() {
        let mut board = Board::empty();
        board.set(sq("h4"), -PAWN);
        board.set(sq("a4"), PAWN);
        let mut out = Vec::new();
        board.generate_en_passant_steps(false, sq("a3") as u8, &mut out);
        assert!(out.is_empty());
    }
}
