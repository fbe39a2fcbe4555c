//! Engine thinking time as set from a front end.

use std::time::Duration;

/// Seconds in one step of the time setting.
pub const STEP_SECS: u64 = 15;

/// Thinking time per engine move, in multiples of 15 seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineTime(u8);

impl EngineTime {
    pub const MIN: EngineTime = EngineTime(1);
    pub const MAX: EngineTime = EngineTime(4);

    /// Clamp `steps` into the supported range.
    #[must_use]
    pub fn new(steps: u8) -> Self {
        EngineTime(steps.clamp(Self::MIN.0, Self::MAX.0))
    }

    #[must_use]
    pub const fn steps(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.0 as u64 * STEP_SECS)
    }

    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0 as u64 * STEP_SECS * 1000
    }

    /// One step longer, saturating.
    #[must_use]
    pub fn longer(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One step shorter, saturating.
    #[must_use]
    pub fn shorter(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for EngineTime {
    fn default() -> Self {
        EngineTime(4)
    }
}
