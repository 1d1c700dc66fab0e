//! Shared test doubles and utilities for the Clockface generator.

mod entropy;
mod logging;
mod surface;

pub use entropy::{FailingEntropy, SequenceEntropy};
pub use logging::init_test_tracing;
pub use surface::{RecordedCircle, RecordedLine, RecordedStroke, RecordingSurface};
