//! Square types and utilities.
//!
//! Cells are indexed `0..64` from a8 (index 0) to h1 (index 63), rank by rank
//! from the black side down. White pawns therefore advance towards lower
//! indices.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Rank number (1..=8) of a cell index.
#[inline]
#[must_use]
pub const fn row(idx: usize) -> i8 {
    8 - (idx / 8) as i8
}

/// File number (1..=8, a = 1) of a cell index.
#[inline]
#[must_use]
pub const fn column(idx: usize) -> i8 {
    (idx % 8) as i8 + 1
}

/// Identifier shared by all cells on the same a1-h8 direction diagonal.
#[inline]
#[must_use]
pub(crate) const fn diag1(idx: usize) -> i8 {
    row(idx) - column(idx)
}

/// Identifier shared by all cells on the same a8-h1 direction diagonal.
#[inline]
#[must_use]
pub(crate) const fn diag2(idx: usize) -> i8 {
    row(idx) + column(idx)
}

/// Algebraic name of a cell index (`0` -> "a8").
#[must_use]
pub fn square_name(idx: usize) -> String {
    Square(idx as u8).to_string()
}

/// A board cell, wrapping the a8-origin index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Create a square from 0-based file (a = 0) and 0-based rank (rank 1 = 0).
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(((7 - rank) * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based file (a = 0)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % 8
    }

    /// 0-based rank (rank 1 = 0)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        7 - self.0 as usize / 8
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file() as u8) as char,
            (b'1' + self.rank() as u8) as char
        )
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => usize::from(bytes[0] - b'a'),
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => usize::from(bytes[1] - b'1'),
            _ => return Err(invalid()),
        };
        Square::new(file, rank).ok_or_else(invalid)
    }
}
