//! Engine moves on a background thread.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::trace;
use parking_lot::Mutex;

use super::controller::{GameController, MoveReport};
use super::error::MoveError;
use crate::sync::StopFlag;

/// An engine move being computed off the caller's thread.
///
/// The controller stays locked until the move is played.
pub struct EngineJob {
    stop: StopFlag,
    handle: JoinHandle<Result<MoveReport, MoveError>>,
}

impl EngineJob {
    /// Start `play_engine_move` on a new thread.
    pub fn spawn(controller: Arc<Mutex<GameController>>) -> io::Result<Self> {
        let stop = controller.lock().stop_flag();
        stop.reset();
        let handle = thread::Builder::new()
            .name("engine-move".into())
            .spawn(move || {
                trace!("engine move job started");
                let result = controller.lock().play_engine_move();
                trace!("engine move job finished");
                result
            })?;
        Ok(EngineJob { stop, handle })
    }

    /// Ask the search to finish with its best move so far.
    pub fn signal_stop(&self) {
        self.stop.stop();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the move is played.
    pub fn wait(self) -> Result<MoveReport, MoveError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Stop the search and wait for the move.
    pub fn stop_and_wait(self) -> Result<MoveReport, MoveError> {
        self.signal_stop();
        self.wait()
    }
}
