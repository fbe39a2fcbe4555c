//! A small chess engine: mailbox board, two-thread move generation,
//! iterative-deepening alpha-beta search and a game controller.

pub mod board;
pub mod game;
pub mod sync;

pub use board::{EndOfGame, Engine, SearchConfig, SearchOutcome, Step};
pub use game::{GameController, GameRecord};
pub use sync::StopFlag;
