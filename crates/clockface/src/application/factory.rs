//! Clock construction: resolve the configuration, then render it.

use clockface_core::entropy::{EntropySource, OsEntropy};
use clockface_core::error::ClockError;
use image::RgbaImage;
use tracing::{info, instrument};

use super::resolver;
use crate::domain::config::ClockConfig;
use crate::domain::time::ClockTime;
use crate::render::face;

/// A rendered clock face and the time it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    time: ClockTime,
    image: RgbaImage,
}

impl Clock {
    /// Returns the time shown on the face.
    #[must_use]
    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Returns the rendered face.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns the edge length of the square image, in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Splits the clock into its time and image.
    #[must_use]
    pub fn into_parts(self) -> (ClockTime, RgbaImage) {
        (self.time, self.image)
    }
}

/// Builds clocks, drawing random times from an injected entropy source.
#[derive(Debug, Default)]
pub struct ClockFactory<E = OsEntropy> {
    entropy: E,
}

impl<E: EntropySource> ClockFactory<E> {
    /// Creates a factory that draws random times from `entropy`.
    #[must_use]
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Builds a clock with a random time and the default colors.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::RandomnessUnavailable` if the time cannot be
    /// drawn, or `ClockError::Render` if `size` is zero or the canvas fails.
    pub fn create(&mut self, size: u32) -> Result<Clock, ClockError> {
        self.create_with_config(size, ClockConfig::default())
    }

    /// Builds a clock from `config`, filling in whatever it leaves unset.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::RandomnessUnavailable` if a time had to be drawn
    /// and could not be, or `ClockError::Render` if `size` is zero or the
    /// canvas fails.
    #[instrument(skip(self, config), fields(time_supplied = config.time.is_some()))]
    pub fn create_with_config(
        &mut self,
        size: u32,
        config: ClockConfig,
    ) -> Result<Clock, ClockError> {
        let resolved = resolver::resolve(config, &mut self.entropy)?;
        let image = face::render(size, &resolved)?;

        info!(time = %resolved.time, "rendered clock face");

        Ok(Clock {
            time: resolved.time,
            image,
        })
    }
}

/// Builds a `size × size` clock with a random time and the default colors,
/// drawing the time from the operating system's secure RNG.
///
/// # Errors
///
/// See [`ClockFactory::create`].
pub fn create(size: u32) -> Result<Clock, ClockError> {
    ClockFactory::new(OsEntropy).create(size)
}

/// Builds a `size × size` clock from `config`, drawing any missing time from
/// the operating system's secure RNG.
///
/// # Errors
///
/// See [`ClockFactory::create_with_config`].
pub fn create_with_config(size: u32, config: ClockConfig) -> Result<Clock, ClockError> {
    ClockFactory::new(OsEntropy).create_with_config(size, config)
}
