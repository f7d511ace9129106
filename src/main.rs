#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Context;
use feed_the_croco::app::App;
use feed_the_croco::constants::LOOP_TIME;
use feed_the_croco::platform;
use tracing::{error, info};

fn run() -> anyhow::Result<()> {
    platform::init_logging().context("Could not initialize logging")?;

    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Exiting");
    Ok(())
}

/// The main entry point of the application.
///
/// Sets up logging, SDL, the window and the game state, then runs the game loop until a
/// quit is requested. Startup failures are logged and end the process with status 1.
pub fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
