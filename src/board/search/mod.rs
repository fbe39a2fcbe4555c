//! Iterative-deepening alpha-beta search.
//!
//! Features:
//! - Aspiration windows around the previous iteration's score
//! - Null-move pruning (off by default) and shallow futility pruning
//! - Reduced-depth verification of quiet moves that look poor
//! - Quiescence search over captures, promotions and checks
//! - Repetition, insufficient-material, mate and stalemate detection

mod alphabeta;
pub mod constants;
mod context;
mod iterative;
mod log;
mod params;
mod quiescence;

use std::fmt;
use std::sync::Arc;

use crate::board::types::Step;
use crate::sync::StopFlag;

pub use self::log::ReportLine;
pub use params::SearchParams;
pub(crate) use quiescence::Activity;

/// Default wall-clock budget for one engine move.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 60_000;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndOfGame {
    /// The side to move is mated.
    Checkmate,
    Stalemate,
    /// Neither side has mating material.
    Draw,
}

impl fmt::Display for EndOfGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndOfGame::Checkmate => write!(f, "checkmate"),
            EndOfGame::Stalemate => write!(f, "stalemate"),
            EndOfGame::Draw => write!(f, "draw"),
        }
    }
}

/// Result of [`Engine::solve`](crate::board::Engine::solve).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Move {
        step: Step,
        /// Score from the mover's view, in centipawns.
        score: i32,
        /// Last level reached by the deepening loop.
        depth: i32,
        nodes: u64,
    },
    /// Nothing to play; the position is already decided.
    GameOver(EndOfGame),
}

impl SearchOutcome {
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        match self {
            SearchOutcome::Move { step, .. } => Some(*step),
            SearchOutcome::GameOver(_) => None,
        }
    }
}

/// Information about a reported root move.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: i32,
    pub seldepth: i32,
    pub score: i32,
    pub best: Step,
    pub nodes: u64,
    pub elapsed_ms: u64,
    /// The printed form of this report.
    pub line: String,
}

/// Callback invoked for every root report.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Everything one `solve` call needs beyond the position.
#[derive(Clone)]
pub struct SearchConfig {
    /// Wall-clock budget in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
    pub params: SearchParams,
    /// External cancellation flag.
    pub stop: Option<StopFlag>,
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            params: SearchParams::default(),
            stop: None,
            info_callback: None,
        }
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("time_limit_ms", &self.time_limit_ms)
            .field("params", &self.params)
            .field("stop", &self.stop)
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}

impl SearchConfig {
    /// Create a time-limited search config
    #[must_use]
    pub fn time(time_limit_ms: u64) -> Self {
        SearchConfig {
            time_limit_ms,
            ..Default::default()
        }
    }

    /// Cap the deepening loop at `max_level`.
    #[must_use]
    pub fn with_max_level(mut self, max_level: i32) -> Self {
        self.params.max_level = max_level;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}
