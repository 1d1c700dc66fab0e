//! Clock time value and secure random selection.

use std::fmt;

use clockface_core::entropy::EntropySource;
use clockface_core::error::ClockError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct hour positions on the face.
pub const HOURS_ON_FACE: u8 = 12;

/// Number of distinct minute positions on the face.
pub const MINUTES_PER_HOUR: u8 = 60;

/// Rejected time components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("time out of range: hour {hour} must be below 12, minute {minute} must be below 60")]
pub struct TimeOutOfRange {
    /// The hour that was supplied.
    pub hour: u8,
    /// The minute that was supplied.
    pub minute: u8,
}

/// A time on a twelve-hour face: hour in `[0, 11]`, minute in `[0, 59]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClockTime", into = "RawClockTime")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a time.
    ///
    /// # Errors
    ///
    /// Returns `TimeOutOfRange` if `hour > 11` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeOutOfRange> {
        if hour >= HOURS_ON_FACE || minute >= MINUTES_PER_HOUR {
            return Err(TimeOutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Draws a time from `entropy`: the hour uniformly from `[0, 11]`, then
    /// the minute uniformly from `[0, 59]`.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::RandomnessUnavailable` if either draw fails.
    pub fn draw(entropy: &mut dyn EntropySource) -> Result<Self, ClockError> {
        let hour = entropy.next_below(u32::from(HOURS_ON_FACE))?;
        let minute = entropy.next_below(u32::from(MINUTES_PER_HOUR))?;
        let component = |v: u32| {
            u8::try_from(v).map_err(|_| {
                ClockError::RandomnessUnavailable(format!("entropy source returned {v}"))
            })
        };
        Self::new(component(hour)?, component(minute)?)
            .map_err(|e| ClockError::RandomnessUnavailable(e.to_string()))
    }

    /// Returns the hour, in `[0, 11]`.
    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute, in `[0, 59]`.
    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Unvalidated wire form of `ClockTime`.
#[derive(Serialize, Deserialize)]
struct RawClockTime {
    hour: u8,
    minute: u8,
}

impl TryFrom<RawClockTime> for ClockTime {
    type Error = TimeOutOfRange;

    fn try_from(raw: RawClockTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

impl From<ClockTime> for RawClockTime {
    fn from(time: ClockTime) -> Self {
        Self {
            hour: time.hour,
            minute: time.minute,
        }
    }
}
