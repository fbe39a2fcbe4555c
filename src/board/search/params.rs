/// Heuristic switches and tuned constants for one search.
///
/// Every knob the search consults lives here; nothing is kept on the
/// engine between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    pub null_move: bool,
    /// First ply where a null move may be tried.
    pub null_min_ply: usize,
    pub null_reduction: i32,
    /// Always re-search the root with a full window.
    pub multi_pv: bool,
    pub futility: bool,
    pub futility_margin: i32,
    pub lazy_eval: bool,
    pub lazy_margin: i32,
    pub lazy_reduction: i32,
    pub quiescence_depth: i32,
    /// Extra quiescence depth after a capture.
    pub quiescence_capture_bonus: i32,
    pub aspiration_window: i32,
    /// Window used once a fifth of the budget is spent.
    pub late_window: i32,
    pub stats_scale: i32,
    pub stats_bias: i32,
    /// Total material below which the endgame tables apply.
    pub endgame_material: i32,
    pub start_level: i32,
    /// Start level for budgets over `long_budget_ms`.
    pub long_start_level: i32,
    pub long_budget_ms: u64,
    pub max_level: i32,
    /// Root checks are extended below this level.
    pub root_check_level: i32,
    pub root_check_extension: i32,
    /// Stop once the root best move has not changed for this many
    /// iterations.
    pub stable_iterations: Option<u32>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            null_move: false,
            null_min_ply: 3,
            null_reduction: 3,
            multi_pv: false,
            futility: true,
            futility_margin: 200,
            lazy_eval: true,
            lazy_margin: 100,
            lazy_reduction: 3,
            quiescence_depth: 4,
            quiescence_capture_bonus: 2,
            aspiration_window: 100,
            late_window: 300,
            stats_scale: 5000,
            stats_bias: 2000,
            endgame_material: 3500,
            start_level: 2,
            long_start_level: 4,
            long_budget_ms: 300_000,
            max_level: 20,
            root_check_level: 7,
            root_check_extension: 2,
            stable_iterations: None,
        }
    }
}

impl SearchParams {
    /// First deepening level for a time budget.
    #[must_use]
    pub fn start_level_for(&self, time_limit_ms: u64) -> i32 {
        if time_limit_ms > self.long_budget_ms {
            self.long_start_level
        } else {
            self.start_level
        }
    }
}
