//! Clock configuration, before and after resolution.

use serde::{Deserialize, Serialize};

use super::colors::{ColorScheme, PartialColorScheme};
use super::time::ClockTime;

/// Caller input: a time to show and colors to use, either of which may be
/// left for the generator to choose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Time to show; drawn at random when absent.
    pub time: Option<ClockTime>,
    /// Colors to use; `ColorScheme::DEFAULT` when absent.
    pub colors: Option<PartialColorScheme>,
}

impl ClockConfig {
    /// Shows `time` instead of a random one.
    #[must_use]
    pub fn with_time(mut self, time: ClockTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Uses `colors`, defaulting any unset slot.
    #[must_use]
    pub fn with_colors(mut self, colors: PartialColorScheme) -> Self {
        self.colors = Some(colors);
        self
    }
}

/// A configuration with every field and color slot set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Time to show.
    pub time: ClockTime,
    /// Colors to use.
    pub colors: ColorScheme,
}
