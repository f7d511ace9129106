//! This module defines the level layout and turns it into entities.

pub mod builder;
pub mod level;
pub mod parser;
