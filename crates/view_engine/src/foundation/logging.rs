//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the `RUST_LOG` environment variable; log output is off by default
/// so the status lines stay readable.
pub fn init() {
    env_logger::init();
}
