//! Error types for board operations.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The side-to-move field is absent
    MissingSideToMove,
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// More than eight ranks in the placement field
    TooManyRanks { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingSideToMove => write!(f, "FEN has no side-to-move field"),
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::TooManyRanks { rank } => {
                write!(f, "Placement has more than 8 ranks (rank index {rank})")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move-text parsing and resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty move text
    Empty,
    /// Text does not fit the accepted move grammar
    Malformed { text: String },
    /// No legal move matches the text
    NoMatchingMove { text: String },
    /// Best-move slot index out of range
    SlotOutOfRange { slot: usize },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty move text"),
            NotationError::Malformed { text } => write!(f, "Malformed move text '{text}'"),
            NotationError::NoMatchingMove { text } => {
                write!(f, "No legal move matches '{text}'")
            }
            NotationError::SlotOutOfRange { slot } => {
                write!(f, "Best-move slot {slot} out of range")
            }
        }
    }
}

impl std::error::Error for NotationError {}
