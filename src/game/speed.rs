use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Slowest pace a session starts at, in milliseconds
pub const INITIAL_INTERVAL_MS: u32 = 200;

/// Fastest pace the ramp can reach, in milliseconds
pub const MIN_INTERVAL_MS: u32 = 20;

/// Delay between two steps of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepInterval(u32);

impl StepInterval {
    pub fn from_millis(ms: u32) -> Self {
        Self(ms.max(MIN_INTERVAL_MS))
    }

    pub fn as_millis(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Interval after one more target has been eaten
    ///
    /// Coarse steps while slow, finer ones as the pace picks up:
    /// above 100 ms drop by 10, above 50 ms by 5, above 20 ms by 1.
    pub fn ramped(self) -> Self {
        let ms = self.0;
        let next = if ms > 100 {
            ms - 10
        } else if ms > 50 {
            ms - 5
        } else if ms > MIN_INTERVAL_MS {
            ms - 1
        } else {
            ms
        };
        Self(next.max(MIN_INTERVAL_MS))
    }

    pub fn is_at_floor(&self) -> bool {
        self.0 <= MIN_INTERVAL_MS
    }
}

impl Default for StepInterval {
    fn default() -> Self {
        Self(INITIAL_INTERVAL_MS)
    }
}
