//! Rendering: face geometry and the rasterizing surface.

pub mod face;
pub mod geometry;
pub mod skia;
