//! Secure entropy abstraction.
//!
//! In production, this wraps the operating-system RNG. In tests, a scripted
//! or failing implementation is injected.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::ClockError;

/// Abstraction over a cryptographically secure source of random integers.
pub trait EntropySource: Send + Sync {
    /// Draw a value uniformly from `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::RandomnessUnavailable` if the source fails or
    /// `bound` is zero.
    fn next_below(&mut self, bound: u32) -> Result<u32, ClockError>;
}

/// Entropy source backed by the operating system's secure RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_below(&mut self, bound: u32) -> Result<u32, ClockError> {
        let mut rng = OsRng;
        sample_below(bound, || {
            rng.try_next_u32()
                .map_err(|e| ClockError::RandomnessUnavailable(e.to_string()))
        })
    }
}

/// Maps raw 32-bit draws onto `[0, bound)` without modulo bias.
///
/// Draws at or above the largest multiple of `bound` that fits in 2^32 are
/// rejected and redrawn.
///
/// # Errors
///
/// Returns `ClockError::RandomnessUnavailable` if `bound` is zero, or the
/// first error produced by `draw`.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_below<F>(bound: u32, mut draw: F) -> Result<u32, ClockError>
where
    F: FnMut() -> Result<u32, ClockError>,
{
    if bound == 0 {
        return Err(ClockError::RandomnessUnavailable(
            "cannot sample from an empty range".to_owned(),
        ));
    }

    let span = 1_u64 << 32;
    let bound = u64::from(bound);
    let limit = span - span % bound;
    loop {
        let value = u64::from(draw()?);
        if value < limit {
            return Ok((value % bound) as u32);
        }
    }
}
