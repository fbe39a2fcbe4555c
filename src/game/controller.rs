//! Game controller: user moves, engine replies and the saved history.

use log::{debug, info};

use super::error::{MoveError, RecordError};
use super::record::GameRecord;
use super::time::EngineTime;
use crate::board::{
    CheckType, EndOfGame, Engine, MoveType, SearchConfig, SearchOutcome, SearchParams, Square,
    Step, PAWN,
};
use crate::sync::StopFlag;

/// State of the game after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check.
    Check,
    Over(EndOfGame),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// What a move did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// The move played, with its check annotation; `None` when the engine
    /// found the game already decided.
    pub step: Option<Step>,
    pub status: GameStatus,
}

/// Drives one game between a user and the engine.
#[derive(Debug)]
pub struct GameController {
    engine: Engine,
    history: Vec<Step>,
    user_plays_white: bool,
    status: GameStatus,
    time: EngineTime,
    params: SearchParams,
    stop: StopFlag,
}

impl GameController {
    /// A controller with the user on white and nothing played yet.
    #[must_use]
    pub fn new() -> Self {
        GameController {
            engine: Engine::new(),
            history: Vec::new(),
            user_plays_white: true,
            status: GameStatus::InProgress,
            time: EngineTime::default(),
            params: SearchParams::default(),
            stop: StopFlag::new(),
        }
    }

    /// Start over from the initial position.
    ///
    /// When the user takes black the engine plays its first move at once and
    /// the report for it is returned.
    pub fn new_game(&mut self, user_plays_white: bool) -> Result<Option<MoveReport>, MoveError> {
        self.engine.new_game();
        self.history.clear();
        self.user_plays_white = user_plays_white;
        self.status = GameStatus::InProgress;
        self.stop.reset();
        info!("new game, user plays {}", if user_plays_white { "white" } else { "black" });
        if user_plays_white {
            Ok(None)
        } else {
            self.play_engine_move().map(Some)
        }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn user_plays_white(&self) -> bool {
        self.user_plays_white
    }

    #[must_use]
    pub fn is_user_turn(&self) -> bool {
        self.engine.position(0).white_move == self.user_plays_white
    }

    #[must_use]
    pub fn time(&self) -> EngineTime {
        self.time
    }

    pub fn set_time(&mut self, time: EngineTime) {
        self.time = time;
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    /// Flag that cuts the engine's current search short.
    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// The piece on `from` is a pawn of the side to move heading for its
    /// last rank, so a promotion piece must be chosen first.
    #[must_use]
    pub fn needs_promotion(&self, from: Square, to: Square) -> bool {
        let white = self.engine.position(0).white_move;
        let (pawn, last_rank) = if white { (PAWN, 7) } else { (-PAWN, 0) };
        self.engine.board().get(from.index()) == pawn && to.rank() == last_rank
    }

    /// Play the side to move's piece from `from` to `to`.
    ///
    /// A promotion without a chosen piece becomes a queen. The board is left
    /// untouched when the move is rejected.
    pub fn play_user_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<MoveType>,
    ) -> Result<MoveReport, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        self.engine.generate_steps(0);
        let wanted = promotion.unwrap_or(MoveType::PromoteToQueen);
        let step = self
            .engine
            .position(0)
            .moves()
            .iter()
            .copied()
            .find(|s| {
                usize::from(s.from) == from.index()
                    && usize::from(s.to) == to.index()
                    && (!s.kind.is_promotion() || s.kind == wanted)
            })
            .ok_or(MoveError::NoSuchMove { from, to })?;

        if self.engine.exposes_king(0, &step) {
            debug!("rejected {step}: king left in check");
            return Err(MoveError::LeavesKingInCheck { from, to });
        }
        Ok(self.commit(step))
    }

    /// Let the engine choose and play a move for the side to move.
    ///
    /// The search runs on the calling thread for the configured time; raise
    /// [`GameController::stop_flag`] from elsewhere to cut it short.
    pub fn play_engine_move(&mut self) -> Result<MoveReport, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        self.engine.clear_best_moves();
        let config = SearchConfig::time(self.time.millis())
            .with_params(self.params.clone())
            .with_stop(self.stop.clone());

        match self.engine.solve(&config) {
            SearchOutcome::Move {
                step, score, depth, ..
            } => {
                info!("engine plays {step} (score {score}, depth {depth})");
                Ok(self.commit(step))
            }
            SearchOutcome::GameOver(end) => {
                self.status = GameStatus::Over(end);
                Ok(MoveReport {
                    step: None,
                    status: self.status,
                })
            }
        }
    }

    /// Rebuild the board from the start position and the history.
    pub fn replay(&mut self) {
        self.engine.new_game();
        for step in &self.history {
            self.engine.commit_step(step);
        }
        self.status = self.classify();
    }

    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            user_plays_white: self.user_plays_white,
            steps: self.history.clone(),
        }
    }

    /// Replace the game with `record`, checking each move as it is replayed.
    ///
    /// On failure the previous game is kept.
    pub fn restore(&mut self, record: GameRecord) -> Result<(), RecordError> {
        self.engine.new_game();
        let mut history = Vec::with_capacity(record.steps.len());
        for (index, saved) in record.steps.iter().enumerate() {
            let legal = self
                .engine
                .legal_steps(0)
                .into_iter()
                .find(|s| s.same_move(saved) && s.piece == saved.piece);
            let Some(mut step) = legal else {
                self.replay();
                return Err(RecordError::InvalidStep { index });
            };
            self.engine.commit_step(&step);
            step.check = saved.check;
            step.weight = 0;
            history.push(step);
        }
        self.user_plays_white = record.user_plays_white;
        self.history = history;
        self.status = self.classify();
        Ok(())
    }

    fn commit(&mut self, mut step: Step) -> MoveReport {
        let mover = self.engine.position(0).side();
        self.engine.commit_step(&step);
        let status = self.classify();
        step.weight = 0;
        step.check = match status {
            GameStatus::Over(EndOfGame::Checkmate) => CheckType::Checkmate,
            _ if self.engine.board().king_in_check(mover.opponent()) => CheckType::Check,
            _ => CheckType::None,
        };
        self.history.push(step);
        self.status = status;
        if let GameStatus::Over(end) = status {
            info!("game over after {step}: {end}");
        }
        MoveReport {
            step: Some(step),
            status,
        }
    }

    /// Status of the side to move at ply 0.
    fn classify(&mut self) -> GameStatus {
        let side = self.engine.position(0).side();
        let in_check = self.engine.board().king_in_check(side);
        if self.engine.legal_steps(0).is_empty() {
            GameStatus::Over(if in_check {
                EndOfGame::Checkmate
            } else {
                EndOfGame::Stalemate
            })
        } else if self.engine.board().insufficient_material() {
            GameStatus::Over(EndOfGame::Draw)
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
