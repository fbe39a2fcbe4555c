//! Commonly used engine types.
//!
//! # Example
//! ```
//! use pocket_chess::board::prelude::*;
//! ```

pub use super::{
    Board, CheckType, Color, EndOfGame, Engine, FenError, MoveType, NotationError,
    SearchConfig, SearchOutcome, SearchParams, Square, Step,
};
pub use crate::sync::StopFlag;
