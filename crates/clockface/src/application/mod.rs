//! Application layer for clock generation.

pub mod factory;
pub mod resolver;
