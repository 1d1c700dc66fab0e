//! Test entropy — deterministic `EntropySource` implementations for tests.

use clockface_core::entropy::EntropySource;
use clockface_core::error::ClockError;

/// An entropy source that returns values from a predetermined sequence,
/// reduced modulo the requested bound. Panics if the sequence is exhausted.
/// Used in tests that need a specific "random" time.
#[derive(Debug)]
pub struct SequenceEntropy {
    values: Vec<u32>,
    index: usize,
    bounds: Vec<u32>,
}

impl SequenceEntropy {
    /// Create a new `SequenceEntropy` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            bounds: Vec::new(),
        }
    }

    /// Returns the bounds requested so far, in call order.
    #[must_use]
    pub fn requested_bounds(&self) -> &[u32] {
        &self.bounds
    }
}

impl EntropySource for SequenceEntropy {
    fn next_below(&mut self, bound: u32) -> Result<u32, ClockError> {
        let val = self.values[self.index];
        self.index += 1;
        self.bounds.push(bound);
        Ok(val % bound)
    }
}

/// An entropy source that always fails. Useful for testing error-handling
/// paths.
#[derive(Debug)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn next_below(&mut self, _bound: u32) -> Result<u32, ClockError> {
        Err(ClockError::RandomnessUnavailable("entropy pool closed".into()))
    }
}
