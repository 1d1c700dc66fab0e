//! Error types.

use thiserror::Error;

/// Errors raised while constructing a clock image.
///
/// Construction is all-or-nothing: any error means no image was produced.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The secure entropy source could not produce a value.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// The drawing surface could not be created or exported.
    #[error("render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randomness_unavailable_display() {
        let err = ClockError::RandomnessUnavailable("device closed".into());
        assert_eq!(err.to_string(), "randomness unavailable: device closed");
    }

    #[test]
    fn test_render_display() {
        let err = ClockError::Render("cannot allocate 0x0 canvas".into());
        assert_eq!(err.to_string(), "render error: cannot allocate 0x0 canvas");
    }
}
