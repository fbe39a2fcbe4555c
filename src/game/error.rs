//! Error types for game play and saved games.

use std::fmt;

use crate::board::Square;

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No generated move joins the two squares
    NoSuchMove { from: Square, to: Square },
    /// The move would leave the mover's king attacked
    LeavesKingInCheck { from: Square, to: Square },
    /// The game has already ended
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSuchMove { from, to } => write!(f, "No move from {from} to {to}"),
            MoveError::LeavesKingInCheck { from, to } => {
                write!(f, "Move {from}-{to} leaves the king in check")
            }
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for saved game decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Input ended early
    Truncated { needed: usize, found: usize },
    /// Unknown format version byte
    UnsupportedVersion { found: u8 },
    /// A step record could not be decoded or replayed
    InvalidStep { index: usize },
    /// Move count is negative or does not fit the `i16` header field
    InvalidCount { count: i64 },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Truncated { needed, found } => {
                write!(f, "Saved game truncated: need {needed} bytes, found {found}")
            }
            RecordError::UnsupportedVersion { found } => {
                write!(f, "Unsupported saved game version {found}")
            }
            RecordError::InvalidStep { index } => write!(f, "Invalid move record at index {index}"),
            RecordError::InvalidCount { count } => write!(f, "Invalid saved game move count {count}"),
        }
    }
}

impl std::error::Error for RecordError {}
