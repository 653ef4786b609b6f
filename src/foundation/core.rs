use std::time::Duration;

use crate::foundation::error::{RacelineError, RacelineResult};

/// Index into a [`Timeline`](crate::timeline::model::Timeline), 0-based.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

/// Grouping key of a frame. Calendar year as recorded in the dataset.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Year(pub i32);

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playback cadence as a whole number of milliseconds per tick.
///
/// The reference cadence is 500 ms per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TickRate {
    millis: u64,
}

pub const DEFAULT_TICK_MILLIS: u64 = 500;

impl TickRate {
    pub fn from_millis(millis: u64) -> RacelineResult<Self> {
        if millis == 0 {
            return Err(RacelineError::validation("TickRate millis must be > 0"));
        }
        Ok(Self { millis })
    }

    pub fn as_millis(self) -> u64 {
        self.millis
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.millis)
    }

    pub fn ticks_to_secs(self, ticks: u64) -> f64 {
        (ticks as f64) * (self.millis as f64) / 1000.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self {
            millis: DEFAULT_TICK_MILLIS,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
