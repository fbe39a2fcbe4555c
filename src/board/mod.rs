//! Chess board representation, move generation and search.
//!
//! The board is a 64-cell mailbox indexed from a8 (0) to h1 (63). An
//! [`Engine`] owns the board, a fixed stack of ply records and the worker
//! thread that generates pawn and king moves.
//!
//! # Example
//! ```no_run
//! use pocket_chess::board::{Engine, SearchConfig};
//!
//! let mut engine = Engine::new();
//! println!("{} legal moves", engine.legal_steps(0).len());
//! let outcome = engine.solve(&SearchConfig::time(1_000));
//! println!("{outcome:?}");
//! ```

mod attack_tables;
mod attacks;
mod engine;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{Engine, START_FEN};
pub use error::{FenError, NotationError, SquareError};
pub use eval::EvalMode;
pub use notation::Notation;
pub use state::{Board, Position, PositionStack, MAX_DEPTH, MAX_EPD, MAX_STEPS};
pub use types::{
    column, fen_char, from_fen_char, is_black, is_white, material, opposite_sides, row,
    square_name, CastlingRights, CheckType, Color, Figure, MoveType, Square, Step, BISHOP,
    FIG_WEIGHT, KING, KNIGHT, NO_FIG, PAWN, QUEEN, ROOK, STEP_BYTES,
};

pub use search::constants::{INFINITY, MATE, WON};
pub use search::{
    EndOfGame, ReportLine, SearchConfig, SearchInfoCallback, SearchIterationInfo, SearchOutcome,
    SearchParams, DEFAULT_TIME_LIMIT_MS,
};
