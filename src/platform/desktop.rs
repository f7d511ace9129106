//! Desktop platform implementation.

use std::time::Duration;

use rand::rngs::ThreadRng;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::GameError;
use crate::formatter::CustomFormatter;

/// Blocks for the rest of the frame. Spins for precision while focused, yields the CPU otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

pub fn rng() -> ThreadRng {
    rand::rng()
}

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() -> Result<(), GameError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(CustomFormatter))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| GameError::InvalidState(format!("Could not install log subscriber: {e}")))
}
