//! Clock face color schemes.

use clockface_core::color::Rgba;
use serde::{Deserialize, Serialize};

/// A fully resolved set of face colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Face fill.
    pub background: Rgba,
    /// Face outline.
    pub border: Rgba,
    /// Hour hand.
    pub hour_hand: Rgba,
    /// Minute hand.
    pub minute_hand: Rgba,
    /// Minute marks that are not on an hour.
    pub minor_tick: Rgba,
    /// Hour marks.
    pub major_tick: Rgba,
}

impl ColorScheme {
    /// The scheme used for any color the caller leaves unset.
    pub const DEFAULT: Self = Self {
        background: Rgba::WHITE,
        border: Rgba::BLACK,
        hour_hand: Rgba::BLUE,
        minute_hand: Rgba::MAGENTA,
        minor_tick: Rgba::BLACK,
        major_tick: Rgba::RED,
    };
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied colors; any unset slot falls back to `ColorScheme::DEFAULT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialColorScheme {
    /// Face fill.
    pub background: Option<Rgba>,
    /// Face outline.
    pub border: Option<Rgba>,
    /// Hour hand.
    pub hour_hand: Option<Rgba>,
    /// Minute hand.
    pub minute_hand: Option<Rgba>,
    /// Minute marks that are not on an hour.
    pub minor_tick: Option<Rgba>,
    /// Hour marks.
    pub major_tick: Option<Rgba>,
}

impl PartialColorScheme {
    /// Sets the face fill.
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the face outline.
    #[must_use]
    pub fn with_border(mut self, color: Rgba) -> Self {
        self.border = Some(color);
        self
    }

    /// Sets the hour hand color.
    #[must_use]
    pub fn with_hour_hand(mut self, color: Rgba) -> Self {
        self.hour_hand = Some(color);
        self
    }

    /// Sets the minute hand color.
    #[must_use]
    pub fn with_minute_hand(mut self, color: Rgba) -> Self {
        self.minute_hand = Some(color);
        self
    }

    /// Sets the minor tick color.
    #[must_use]
    pub fn with_minor_tick(mut self, color: Rgba) -> Self {
        self.minor_tick = Some(color);
        self
    }

    /// Sets the major tick color.
    #[must_use]
    pub fn with_major_tick(mut self, color: Rgba) -> Self {
        self.major_tick = Some(color);
        self
    }

    /// Returns a complete scheme, taking each unset slot from
    /// `ColorScheme::DEFAULT`. `self` is left untouched.
    #[must_use]
    pub fn resolve(&self) -> ColorScheme {
        let d = ColorScheme::DEFAULT;
        ColorScheme {
            background: self.background.unwrap_or(d.background),
            border: self.border.unwrap_or(d.border),
            hour_hand: self.hour_hand.unwrap_or(d.hour_hand),
            minute_hand: self.minute_hand.unwrap_or(d.minute_hand),
            minor_tick: self.minor_tick.unwrap_or(d.minor_tick),
            major_tick: self.major_tick.unwrap_or(d.major_tick),
        }
    }
}

impl From<ColorScheme> for PartialColorScheme {
    fn from(scheme: ColorScheme) -> Self {
        Self {
            background: Some(scheme.background),
            border: Some(scheme.border),
            hour_hand: Some(scheme.hour_hand),
            minute_hand: Some(scheme.minute_hand),
            minor_tick: Some(scheme.minor_tick),
            major_tick: Some(scheme.major_tick),
        }
    }
}
