use std::time::{Duration, Instant};

use super::{SearchConfig, SearchParams};
use crate::board::engine::Engine;
use crate::board::eval::EvalMode;
use crate::board::types::Step;

/// State of one `solve` call.
///
/// Borrows the engine for the whole search; the recursion reads and
/// writes the board and ply stack through it.
pub(super) struct SearchContext<'a> {
    pub engine: &'a mut Engine,
    pub config: &'a SearchConfig,
    pub start: Instant,
    /// Deepening level of the running iteration.
    pub level: i32,
    /// Root depth of the move being searched; quiescence raises it.
    pub seldepth: i32,
    /// Statistical evaluation; dropped late in the budget.
    pub stats: bool,
    /// Inside a null-move search.
    pub in_null: bool,
    /// Inside a reduced verification search.
    pub lazy: bool,
    /// Last root report, with the depth it was made at.
    pub last_report: Option<(Step, i32)>,
    /// Root best matched a best-move slot twice in a row.
    pub solved: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(engine: &'a mut Engine, config: &'a SearchConfig) -> Self {
        SearchContext {
            engine,
            config,
            start: Instant::now(),
            level: 0,
            seldepth: 0,
            stats: true,
            in_null: false,
            lazy: false,
            last_report: None,
            solved: false,
        }
    }

    #[inline]
    pub fn params(&self) -> &'a SearchParams {
        &self.config.params
    }

    #[inline]
    pub fn evaluate(&self, ply: usize) -> i32 {
        let mode = if self.stats {
            EvalMode::Statistical {
                scale: self.config.params.stats_scale,
                bias: self.config.params.stats_bias,
            }
        } else {
            EvalMode::Material
        };
        self.engine.evaluate(ply, mode)
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The move just taken back at `ply` closes a repetition.
    ///
    /// Never true under a null move: the skipped turn breaks the cycle.
    #[inline]
    pub fn repeated(&self, ply: usize) -> bool {
        !self.in_null && self.engine.is_repetition(ply)
    }

    /// The external stop flag has been raised.
    #[inline]
    pub fn stopped(&self) -> bool {
        self.config.stop.as_ref().is_some_and(|flag| flag.is_stopped())
    }

    /// More than `fraction` of the budget is spent.
    pub fn budget_spent(&self, fraction: f64) -> bool {
        let limit = self.config.time_limit_ms;
        limit > 0 && self.elapsed().as_millis() as f64 > limit as f64 * fraction
    }

    #[inline]
    pub fn timed_out(&self) -> bool {
        self.budget_spent(1.0)
    }
}
