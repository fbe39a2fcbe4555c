//! King-safety predicates.

use super::attack_tables::{DIAGONAL_RAYS, KING_STEPS, KNIGHT_STEPS, STRAIGHT_RAYS};
use super::state::Board;
use super::types::{column, row, Color, BISHOP, KING, KNIGHT, NO_FIG, PAWN, QUEEN, ROOK};

impl Board {
    /// True if the white king is attacked.
    #[must_use]
    pub fn check_on_white_king(&self) -> bool {
        self.king_in_check(Color::White)
    }

    /// True if the black king is attacked.
    #[must_use]
    pub fn check_on_black_king(&self) -> bool {
        self.king_in_check(Color::Black)
    }

    /// True if `color`'s king is attacked by any enemy figure.
    ///
    /// A board without that king is never in check.
    #[must_use]
    pub fn king_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        let enemy = color.opponent().sign();

        if self.slider_attacks(king, enemy) {
            return true;
        }

        if KNIGHT_STEPS[king]
            .iter()
            .any(|&sq| self.get(sq as usize) == enemy * KNIGHT)
        {
            return true;
        }

        // Enemy pawns sit one rank ahead of the king from its own side.
        let (left, right, in_range) = match color {
            Color::White => (king.wrapping_sub(9), king.wrapping_sub(7), row(king) < 7),
            Color::Black => (king + 7, king + 9, row(king) > 2),
        };
        if in_range {
            if column(king) > 1 && self.get(left) == enemy * PAWN {
                return true;
            }
            if column(king) < 8 && self.get(right) == enemy * PAWN {
                return true;
            }
        }

        KING_STEPS[king]
            .iter()
            .any(|&sq| self.get(sq as usize) == enemy * KING)
    }

    /// Cheap check test that only looks along slider lines.
    ///
    /// Used after quiet moves in quiescence, where only discovered or direct
    /// line checks matter for the move filter.
    #[must_use]
    pub(crate) fn slider_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.slider_attacks(king, color.opponent().sign()),
            None => false,
        }
    }

    /// True if a slider of side `enemy` (+1 / -1) hits `sq` along a line.
    fn slider_attacks(&self, sq: usize, enemy: i8) -> bool {
        let diagonal = DIAGONAL_RAYS[sq].iter().any(|ray| {
            self.first_blocker(ray)
                .is_some_and(|f| f == enemy * BISHOP || f == enemy * QUEEN)
        });
        diagonal
            || STRAIGHT_RAYS[sq].iter().any(|ray| {
                self.first_blocker(ray)
                    .is_some_and(|f| f == enemy * ROOK || f == enemy * QUEEN)
            })
    }

    #[inline]
    fn first_blocker(&self, ray: &[u8]) -> Option<i8> {
        ray.iter()
            .map(|&sq| self.get(sq as usize))
            .find(|&f| f != NO_FIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn board_with(pieces: &[(&str, i8)]) -> Board {
        let mut board = Board::empty();
        for (name, fig) in pieces {
            let sq: Square = name.parse().unwrap();
            board.set(sq.index(), *fig);
        }
        board
    }

    #[test]
    fn rook_and_bishop_lines() {
        let board = board_with(&[("e1", KING), ("e8", -ROOK), ("a8", -KING)]);
        assert!(board.check_on_white_king());

        let blocked = board_with(&[("e1", KING), ("e8", -ROOK), ("e4", PAWN), ("a8", -KING)]);
        assert!(!blocked.check_on_white_king());

        let diag = board_with(&[("e1", KING), ("h4", -BISHOP), ("a8", -KING)]);
        assert!(diag.check_on_white_king());
        assert!(diag.slider_check(Color::White));
    }

    #[test]
    fn pawn_attacks_respect_direction() {
        let attacked = board_with(&[("e4", KING), ("d5", -PAWN), ("a8", -KING)]);
        assert!(attacked.check_on_white_king());

        let behind = board_with(&[("e4", KING), ("d3", -PAWN), ("a8", -KING)]);
        assert!(!behind.check_on_white_king());

        let black = board_with(&[("e5", -KING), ("f4", PAWN), ("a1", KING)]);
        assert!(black.check_on_black_king());

        // no wrap-around from the a-file to the h-file
        let edge = board_with(&[("a4", KING), ("h6", -PAWN), ("h8", -KING)]);
        assert!(!edge.check_on_white_king());
    }

    #[test]
    fn knights_and_kings() {
        let knight = board_with(&[("e1", KING), ("f3", -KNIGHT), ("a8", -KING)]);
        assert!(knight.check_on_white_king());
        assert!(!knight.slider_check(Color::White));

        let kings = board_with(&[("e4", KING), ("e5", -KING)]);
        assert!(kings.check_on_white_king());
        assert!(kings.check_on_black_king());
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = board_with(&[("e8", -ROOK)]);
        assert!(!board.check_on_white_king());
    }
}
