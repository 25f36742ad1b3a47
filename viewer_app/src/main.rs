//! Interactive image viewer
//!
//! Opens a centered window, decodes `sample.png` from the working directory,
//! and displays it until the user presses Escape or closes the window. The
//! draw loop is paced to the configured frame rate.

use view_engine::prelude::*;

fn main() {
    env_logger::Builder::from_default_env().init();

    log::info!("Starting interactive viewer");

    let config = ViewerConfig::default();
    if let Err(e) = run_interactive(&config) {
        eprintln!("\x1b[31m  error: {}\x1b[39m", e);
        std::process::exit(1);
    }

    log::info!("Viewer finished");
}
