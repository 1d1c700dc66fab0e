//! Domain layer for clock generation.

pub mod colors;
pub mod config;
pub mod time;
