use super::super::attack_tables::KING_STEPS;
use super::super::state::Board;
use super::super::types::{
    opposite_sides, CastlingRights, Color, MoveType, Step, KING, NO_FIG, ROOK,
};

/// Cells of one castling manoeuvre.
struct CastlePath {
    kind: MoveType,
    king_from: usize,
    king_to: usize,
    rook: usize,
    transit: usize,
    empty: &'static [usize],
}

const fn castle_paths(color: Color) -> [CastlePath; 2] {
    match color {
        Color::White => [
            CastlePath {
                kind: MoveType::CastleKingside,
                king_from: 60,
                king_to: 62,
                rook: 63,
                transit: 61,
                empty: &[61, 62],
            },
            CastlePath {
                kind: MoveType::CastleQueenside,
                king_from: 60,
                king_to: 58,
                rook: 56,
                transit: 59,
                empty: &[59, 58, 57],
            },
        ],
        Color::Black => [
            CastlePath {
                kind: MoveType::CastleKingside,
                king_from: 4,
                king_to: 6,
                rook: 7,
                transit: 5,
                empty: &[5, 6],
            },
            CastlePath {
                kind: MoveType::CastleQueenside,
                king_from: 4,
                king_to: 2,
                rook: 0,
                transit: 3,
                empty: &[3, 2, 1],
            },
        ],
    }
}

impl Board {
    pub(crate) fn generate_king_steps(&self, from: usize, out: &mut Vec<Step>) {
        self.leaper_steps(from, &KING_STEPS[from], out);
    }

    /// Moves onto each listed cell that is empty or hostile.
    pub(crate) fn leaper_steps(&self, from: usize, targets: &[u8], out: &mut Vec<Step>) {
        let fig = self.get(from);
        for &to in targets {
            let target = self.get(to as usize);
            if target == NO_FIG || opposite_sides(fig, target) {
                out.push(Step::new(from as u8, to, fig, target));
            }
        }
    }

    /// Castling moves for `color`, assuming it is not in check.
    ///
    /// The king is placed on the transit cell while the check test runs and
    /// put back afterwards, so the board and king cache are unchanged on return.
    pub(crate) fn generate_castling_steps(
        &mut self,
        color: Color,
        rights: CastlingRights,
        out: &mut Vec<Step>,
    ) {
        let sign = color.sign();
        for (path, kingside) in castle_paths(color).iter().zip([true, false]) {
            if !rights.has(color, kingside)
                || self.get(path.king_from) != sign * KING
                || self.get(path.rook) != sign * ROOK
                || path.empty.iter().any(|&sq| self.get(sq) != NO_FIG)
            {
                continue;
            }

            self.set(path.king_from, NO_FIG);
            self.set(path.transit, sign * KING);
            self.set_king_square(color, path.transit);
            let attacked = self.king_in_check(color);
            self.set(path.transit, NO_FIG);
            self.set(path.king_from, sign * KING);
            self.set_king_square(color, path.king_from);

            if !attacked {
                out.push(
                    Step::new(path.king_from as u8, path.king_to as u8, sign * KING, NO_FIG)
                        .with_kind(path.kind),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{BISHOP, PAWN};

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set(60, KING);
        board.set(56, ROOK);
        board.set(63, ROOK);
        board.set(4, -KING);
        board
    }

    #[test]
    fn both_wings_when_path_is_clear() {
        let mut board = castling_board();
        let mut out = Vec::new();
        board.generate_castling_steps(Color::White, CastlingRights::all(), &mut out);
        let kinds: Vec<MoveType> = out.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![MoveType::CastleKingside, MoveType::CastleQueenside]);
        assert_eq!(board.king_square(Color::White), Some(60));
    }

    #[test]
    fn attacked_transit_blocks_one_wing() {
        let mut board = castling_board();
        // bishop on c4 hits f1
        board.set(34, -BISHOP);
        let mut out = Vec::new();
        board.generate_castling_steps(Color::White, CastlingRights::all(), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, MoveType::CastleQueenside);
    }

    #[test]
    fn missing_right_or_blocked_path() {
        let mut board = castling_board();
        board.set(57, PAWN); // b1 occupied
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, true);
        let mut out = Vec::new();
        board.generate_castling_steps(Color::White, rights, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn king_steps_skip_own_pieces() {
        let mut board = castling_board();
        board.set(52, PAWN); // e2
        board.set(51, -PAWN); // d2
        let mut out = Vec::new();
        board.generate_king_steps(60, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().any(|s| s.captured == -PAWN));
    }
}
