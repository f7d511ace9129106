//! Platform abstraction layer: frame pacing, randomness, and log output.

mod desktop;
pub use desktop::*;
