//! Move records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Figure, FIG_SYMBOLS, NO_FIG, PAWN};
use super::square::square_name;

/// Size of a step in its packed byte form.
pub const STEP_BYTES: usize = 8;

/// Check annotation attached to a step once it has been applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum CheckType {
    #[default]
    None = 0,
    Check = 1,
    Checkmate = 2,
}

impl CheckType {
    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            0 => Some(CheckType::None),
            1 => Some(CheckType::Check),
            2 => Some(CheckType::Checkmate),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_check(self) -> bool {
        !matches!(self, CheckType::None)
    }
}

/// Kind of move. Promotion kinds encode the promoted figure as `kind - 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum MoveType {
    Unknown = -1,
    #[default]
    Simple = 0,
    EnPassant = 1,
    CastleKingside = 2,
    CastleQueenside = 3,
    PromoteToKnight = 4,
    PromoteToBishop = 5,
    PromoteToRook = 6,
    PromoteToQueen = 7,
}

impl MoveType {
    /// Promotion kinds in generation order
    pub const PROMOTIONS: [MoveType; 4] = [
        MoveType::PromoteToKnight,
        MoveType::PromoteToBishop,
        MoveType::PromoteToRook,
        MoveType::PromoteToQueen,
    ];

    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(MoveType::Unknown),
            0 => Some(MoveType::Simple),
            1 => Some(MoveType::EnPassant),
            2 => Some(MoveType::CastleKingside),
            3 => Some(MoveType::CastleQueenside),
            4 => Some(MoveType::PromoteToKnight),
            5 => Some(MoveType::PromoteToBishop),
            6 => Some(MoveType::PromoteToRook),
            7 => Some(MoveType::PromoteToQueen),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self as i8 > MoveType::CastleQueenside as i8
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveType::CastleKingside | MoveType::CastleQueenside)
    }

    /// Absolute figure code a pawn turns into.
    #[inline]
    #[must_use]
    pub const fn promotion_figure(self) -> Option<Figure> {
        if self.is_promotion() {
            Some(self as i8 - 2)
        } else {
            None
        }
    }

    /// Promotion kind named by `N`, `B`, `R` or `Q` (either case).
    #[must_use]
    pub fn from_promotion_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(MoveType::PromoteToKnight),
            'B' => Some(MoveType::PromoteToBishop),
            'R' => Some(MoveType::PromoteToRook),
            'Q' => Some(MoveType::PromoteToQueen),
            _ => None,
        }
    }
}

/// A move record.
///
/// Squares are a8-origin cell indices. `captured` holds the figure removed
/// from the board (the enemy pawn for en passant), `0` for quiet moves.
/// `weight` is scratch space for move ordering and root scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    pub piece: Figure,
    pub captured: Figure,
    pub from: u8,
    pub to: u8,
    pub check: CheckType,
    pub kind: MoveType,
    pub weight: i16,
}

impl Step {
    /// The empty step used for null-move searches.
    pub const NULL: Step = Step {
        piece: NO_FIG,
        captured: NO_FIG,
        from: 0,
        to: 0,
        check: CheckType::None,
        kind: MoveType::Simple,
        weight: 0,
    };

    #[inline]
    #[must_use]
    pub const fn new(from: u8, to: u8, piece: Figure, captured: Figure) -> Self {
        Step {
            piece,
            captured,
            from,
            to,
            check: CheckType::None,
            kind: MoveType::Simple,
            weight: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_kind(mut self, kind: MoveType) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.piece == NO_FIG
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured != NO_FIG
    }

    /// Same origin and destination as `other`.
    #[inline]
    #[must_use]
    pub const fn same_squares(&self, other: &Step) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// Same origin, destination and kind as `other`.
    #[inline]
    #[must_use]
    pub const fn same_move(&self, other: &Step) -> bool {
        self.same_squares(other) && self.kind as i8 == other.kind as i8
    }

    /// Packed little-endian form used by saved games.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; STEP_BYTES] {
        let w = self.weight.to_le_bytes();
        [
            self.piece as u8,
            self.captured as u8,
            self.from,
            self.to,
            self.check as i8 as u8,
            self.kind as i8 as u8,
            w[0],
            w[1],
        ]
    }

    /// Decode a packed step; `None` if a field is out of range.
    #[must_use]
    pub fn from_bytes(bytes: [u8; STEP_BYTES]) -> Option<Self> {
        let piece = bytes[0] as i8;
        let captured = bytes[1] as i8;
        if !(-6..=6).contains(&piece) || !(-6..=6).contains(&captured) {
            return None;
        }
        if bytes[2] >= 64 || bytes[3] >= 64 {
            return None;
        }
        Some(Step {
            piece,
            captured,
            from: bytes[2],
            to: bytes[3],
            check: CheckType::from_i8(bytes[4] as i8)?,
            kind: MoveType::from_i8(bytes[5] as i8)?,
            weight: i16::from_le_bytes([bytes[6], bytes[7]]),
        })
    }
}

/// Minimal long-algebraic text: `Ng1-f3`, `e7xd8=Q+`, `0-0`, empty for null.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return Ok(());
        }
        match self.kind {
            MoveType::CastleKingside => write!(f, "0-0")?,
            MoveType::CastleQueenside => write!(f, "0-0-0")?,
            _ => {
                let kind = self.piece.unsigned_abs() as usize;
                if kind as i8 > PAWN {
                    write!(f, "{}", FIG_SYMBOLS[kind])?;
                }
                let sep = if self.is_capture() { 'x' } else { '-' };
                write!(
                    f,
                    "{}{}{}",
                    square_name(self.from as usize),
                    sep,
                    square_name(self.to as usize)
                )?;
            }
        }
        if let Some(fig) = self.kind.promotion_figure() {
            write!(f, "={}", FIG_SYMBOLS[fig as usize])?;
        }
        match self.check {
            CheckType::Check => write!(f, "+"),
            CheckType::Checkmate => write!(f, "#"),
            CheckType::None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::piece::{KING, KNIGHT, QUEEN};

    #[test]
    fn promotion_figures() {
        assert_eq!(MoveType::PromoteToKnight.promotion_figure(), Some(KNIGHT));
        assert_eq!(MoveType::PromoteToQueen.promotion_figure(), Some(QUEEN));
        assert_eq!(MoveType::CastleQueenside.promotion_figure(), None);
        assert!(!MoveType::Unknown.is_promotion());
        assert_eq!(MoveType::from_promotion_letter('r'), Some(MoveType::PromoteToRook));
    }

    #[test]
    fn text_forms() {
        assert_eq!(Step::new(52, 36, PAWN, 0).to_string(), "e2-e4");
        assert_eq!(Step::new(62, 45, KNIGHT, 0).to_string(), "Ng1-f3");

        let mut promo = Step::new(12, 3, PAWN, -QUEEN).with_kind(MoveType::PromoteToQueen);
        promo.check = CheckType::Check;
        assert_eq!(promo.to_string(), "e7xd8=Q+");

        let castle = Step::new(60, 62, KING, 0).with_kind(MoveType::CastleKingside);
        assert_eq!(castle.to_string(), "0-0");
        assert_eq!(Step::NULL.to_string(), "");
    }

    #[test]
    fn byte_form_round_trips() {
        let mut step = Step::new(12, 4, -PAWN, QUEEN).with_kind(MoveType::PromoteToRook);
        step.check = CheckType::Checkmate;
        step.weight = -1234;
        assert_eq!(Step::from_bytes(step.to_bytes()), Some(step));
    }

    #[test]
    fn byte_form_rejects_garbage() {
        let mut bytes = Step::new(1, 2, PAWN, 0).to_bytes();
        bytes[5] = 42;
        assert_eq!(Step::from_bytes(bytes), None);
        let mut bytes = Step::new(1, 2, PAWN, 0).to_bytes();
        bytes[3] = 64;
        assert_eq!(Step::from_bytes(bytes), None);
    }
}
