//! Clockface — analog clock face challenge images.
//!
//! Renders a square raster of a clock face showing either a caller-supplied
//! time or one drawn from a secure entropy source. The caller receives the
//! time alongside the image and decides how to encode or verify it.

pub mod application;
pub mod domain;
pub mod render;

pub use application::factory::{Clock, ClockFactory, create, create_with_config};
pub use clockface_core::color::Rgba;
pub use clockface_core::entropy::{EntropySource, OsEntropy};
pub use clockface_core::error::ClockError;
pub use domain::colors::{ColorScheme, PartialColorScheme};
pub use domain::config::{ClockConfig, ResolvedConfig};
pub use domain::time::{ClockTime, TimeOutOfRange};
