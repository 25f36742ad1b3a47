//! # View Engine
//!
//! A small engine for displaying a single image in a window, built on SDL2.
//!
//! The library owns the whole lifecycle: platform bootstrap (subsystem,
//! window, accelerated canvas), image decode, texture upload, event
//! interpretation, and frame pacing. Applications pick one of two run
//! sequences:
//!
//! - [`run_interactive`]: paced draw loop until the user quits (Escape or a
//!   window close request).
//! - [`run_splash`]: draw once, hold the frame for a fixed duration, exit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use view_engine::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     let config = ViewerConfig::default();
//!     run_interactive(&config)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod events;
pub mod foundation;
pub mod platform;
pub mod render;

mod viewer;

pub use viewer::{run_interactive, run_splash, ViewerError};

/// Common imports for viewer applications
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData},
        config::{Config, ConfigError, RendererConfig, ViewerConfig, WindowConfig},
        foundation::{
            scoped::{Scoped, Shared},
            time::FramePacer,
        },
        run_interactive, run_splash, ViewerError,
    };
}
