//! Core chess types.
//!
//! - `Figure` codes and `Color`
//! - `Square` and cell index helpers
//! - `Step` move records with their `MoveType` and `CheckType`
//! - `CastlingRights`

mod castling;
mod piece;
mod square;
mod step;

pub use castling::CastlingRights;
pub use piece::{
    fen_char, from_fen_char, is_black, is_white, material, opposite_sides, Color, Figure,
    BISHOP, FIG_WEIGHT, KING, KNIGHT, NO_FIG, PAWN, QUEEN, ROOK,
};
pub use square::{column, row, square_name, Square};
pub use step::{CheckType, MoveType, Step, STEP_BYTES};

pub(crate) use piece::from_symbol;
pub(crate) use square::{diag1, diag2};
