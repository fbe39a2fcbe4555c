//! Figure codes and side colours.
//!
//! A figure is a signed byte: `0` is an empty cell, `1..=6` are pawn through
//! king. White figures are positive, black figures negative.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed figure code stored in each board cell.
pub type Figure = i8;

pub const NO_FIG: Figure = 0;
pub const PAWN: Figure = 1;
pub const KNIGHT: Figure = 2;
pub const BISHOP: Figure = 3;
pub const ROOK: Figure = 4;
pub const QUEEN: Figure = 5;
pub const KING: Figure = 6;

/// Material value in centipawns, indexed by absolute figure code.
pub const FIG_WEIGHT: [i32; 7] = [0, 100, 320, 330, 500, 900, 0];

/// Move-text letter per absolute figure code (pawns have none).
pub(crate) const FIG_SYMBOLS: [char; 7] = [' ', ' ', 'N', 'B', 'R', 'Q', 'K'];

#[inline]
#[must_use]
pub const fn is_white(fig: Figure) -> bool {
    fig > 0
}

#[inline]
#[must_use]
pub const fn is_black(fig: Figure) -> bool {
    fig < 0
}

/// True when `a` and `b` are both non-empty and belong to opposite sides.
#[inline]
#[must_use]
pub const fn opposite_sides(a: Figure, b: Figure) -> bool {
    (a > 0 && b < 0) || (a < 0 && b > 0)
}

/// Material value of a figure regardless of side.
#[inline]
#[must_use]
pub const fn material(fig: Figure) -> i32 {
    FIG_WEIGHT[fig.unsigned_abs() as usize]
}

/// FEN letter for a figure (uppercase for white).
#[must_use]
pub fn fen_char(fig: Figure) -> Option<char> {
    let c = match fig.abs() {
        PAWN => 'p',
        KNIGHT => 'n',
        BISHOP => 'b',
        ROOK => 'r',
        QUEEN => 'q',
        KING => 'k',
        _ => return None,
    };
    Some(if is_white(fig) { c.to_ascii_uppercase() } else { c })
}

/// Parse a FEN letter into a figure code.
#[must_use]
pub fn from_fen_char(c: char) -> Option<Figure> {
    let fig = match c.to_ascii_lowercase() {
        'p' => PAWN,
        'n' => KNIGHT,
        'b' => BISHOP,
        'r' => ROOK,
        'q' => QUEEN,
        'k' => KING,
        _ => return None,
    };
    Some(if c.is_ascii_uppercase() { fig } else { -fig })
}

/// Figure kind named by an uppercase move-text letter.
#[must_use]
pub(crate) fn from_symbol(c: char) -> Option<Figure> {
    match c {
        'N' => Some(KNIGHT),
        'B' => Some(BISHOP),
        'R' => Some(ROOK),
        'Q' => Some(QUEEN),
        'K' => Some(KING),
        _ => None,
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn from_white_move(white_move: bool) -> Self {
        if white_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign applied to figure codes of this side (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> Figure {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
