//! Configuration resolution: fills every unset field with a default.

use clockface_core::entropy::EntropySource;
use clockface_core::error::ClockError;
use tracing::debug;

use crate::domain::colors::ColorScheme;
use crate::domain::config::{ClockConfig, ResolvedConfig};
use crate::domain::time::ClockTime;

/// Resolves `config` into a fully populated configuration.
///
/// A missing time is drawn from `entropy`; missing colors fall back to
/// `ColorScheme::DEFAULT` slot by slot.
///
/// # Errors
///
/// Returns `ClockError::RandomnessUnavailable` if a time had to be drawn and
/// `entropy` failed.
pub fn resolve(
    config: ClockConfig,
    entropy: &mut dyn EntropySource,
) -> Result<ResolvedConfig, ClockError> {
    let time = if let Some(time) = config.time {
        debug!(%time, "using supplied time");
        time
    } else {
        let time = ClockTime::draw(entropy)?;
        debug!(%time, "drew random time");
        time
    };

    let colors = config
        .colors
        .map_or(ColorScheme::DEFAULT, |partial| partial.resolve());

    Ok(ResolvedConfig { time, colors })
}
