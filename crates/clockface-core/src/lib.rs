//! Clockface Core — shared abstractions.
//!
//! This crate defines the error type, color and point values, and the two
//! seams the generator depends on: a secure entropy source and a drawing
//! surface. It contains no rasterization code.

pub mod color;
pub mod entropy;
pub mod error;
pub mod surface;
