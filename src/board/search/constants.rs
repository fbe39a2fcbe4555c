//! Score conventions shared by the search.

/// Bound of the full search window.
pub const INFINITY: i32 = 20_000;

/// Base of mate scores; a mate found at ply `p` scores `-(MATE - p)`.
pub const MATE: i32 = 10_000;

/// Scores above this end the deepening loop as a proven win.
pub const WON: i32 = 9_900;

/// Root reports switch from pawns to `+M<n>` above this weight.
pub const MATE_REPORT: i32 = 9_000;

/// Ordering weight given to root moves that leave the king in check.
pub(crate) const ILLEGAL: i16 = -30_000;

/// Bonus keeping the previous iteration's first root move in front.
pub(crate) const ROOT_FIRST_BONUS: i32 = 10_000;

/// Weight every root move starts an iteration with.
pub(crate) const ROOT_UNSEARCHED: i16 = -8_000;

/// Root ordering bonus for a checking move.
pub(crate) const ROOT_CHECK_BONUS: i32 = 500;
