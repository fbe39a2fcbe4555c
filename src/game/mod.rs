//! Playing a game against the engine.
//!
//! [`GameController`] keeps the move history and turns user and engine moves
//! into reports a front end can show. [`GameRecord`] is the saved-game byte
//! form; callers own where it is stored.

mod controller;
mod error;
mod job;
mod record;
mod time;

pub use controller::{GameController, GameStatus, MoveReport};
pub use error::{MoveError, RecordError};
pub use job::EngineJob;
pub use record::{GameRecord, RECORD_VERSION};
pub use time::EngineTime;
