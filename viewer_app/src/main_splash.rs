//! Splash-screen variant
//!
//! Opens a centered window, decodes `sample.png` from the working directory,
//! draws it exactly once, holds the frame for three seconds, and exits.
//! Input is never read.

use view_engine::foundation::logging;
use view_engine::prelude::*;

fn main() {
    logging::init();

    log::info!("Starting splash viewer");

    let config = ViewerConfig::default();
    if let Err(e) = run_splash(&config) {
        eprintln!("\x1b[31m  error: {}\x1b[39m", e);
        std::process::exit(1);
    }

    log::info!("Splash finished");
}
