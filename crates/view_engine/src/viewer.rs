//! Run sequences for the two display variants
//!
//! Both variants share the same bootstrap: platform stage, image decode,
//! texture upload. The interactive variant then runs a paced draw loop until
//! the user quits; the splash variant draws once and holds the frame.

use std::thread;
use std::time::Duration;

use sdl2::render::{Texture, WindowCanvas};
use thiserror::Error;

use crate::assets::{AssetError, ImageData};
use crate::config::ViewerConfig;
use crate::events;
use crate::foundation::status;
use crate::foundation::time::FramePacer;
use crate::platform::Stage;
use crate::render::texture;

/// Viewer-level errors. Every variant is fatal: the error unwinds to the
/// entry point, already-acquired resources are released along the way, and
/// the process exits nonzero.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Platform subsystem failed to initialize
    #[error("Platform init failed: {0}")]
    Init(String),

    /// Display surface creation failed
    #[error("Window creation failed: {0}")]
    Window(String),

    /// Drawing context creation failed
    #[error("Renderer creation failed: {0}")]
    Renderer(String),

    /// Image decode failed
    #[error("Image load failed: {0}")]
    ImageLoad(#[from] AssetError),

    /// Texture creation or pixel upload failed
    #[error("Texture upload failed: {0}")]
    Texture(String),

    /// A draw call failed mid-frame
    #[error("Render failed: {0}")]
    Render(String),
}

/// Display the configured image until the user quits.
///
/// The loop body always runs at least once; the continue-flag is tested
/// after each paced iteration.
pub fn run_interactive(config: &ViewerConfig) -> Result<(), ViewerError> {
    let mut stage = Stage::acquire(&config.window, &config.renderer)?;

    let image = status::check(
        "viewer / decode image",
        ImageData::from_file(&config.image_path),
        ViewerError::ImageLoad,
    )?;

    let texture = status::check(
        "viewer / upload texture",
        texture::upload(&stage.creator, &image),
        ViewerError::Texture,
    )?;

    let mut pump = stage.event_pump()?;
    let pacer = FramePacer::new(config.target_fps);
    let mut is_continue = true;

    loop {
        pacer.pace(|| -> Result<(), ViewerError> {
            status::info("viewer / frame: begin");
            draw_frame(&mut stage.canvas, &texture)?;
            let batch = events::drain(&mut pump);
            events::scan(&batch, &mut is_continue);
            status::info("viewer / frame: end");
            Ok(())
        })?;

        if !is_continue {
            break;
        }
    }

    Ok(())
}

/// Display the configured image once, hold it for the configured duration,
/// then exit. Never reads events.
pub fn run_splash(config: &ViewerConfig) -> Result<(), ViewerError> {
    let mut stage = Stage::acquire(&config.window, &config.renderer)?;

    let image = status::check(
        "viewer / decode image",
        ImageData::from_file(&config.image_path),
        ViewerError::ImageLoad,
    )?;

    let texture = status::check(
        "viewer / upload texture",
        texture::upload(&stage.creator, &image),
        ViewerError::Texture,
    )?;

    draw_frame(&mut stage.canvas, &texture)?;

    let hold = Duration::from_millis(config.splash_hold_ms);
    status::info(&format!("viewer / hold frame: {} [ms]", hold.as_millis()));
    thread::sleep(hold);

    Ok(())
}

/// One clear/copy/present cycle: the texture is stretched over the whole
/// back buffer, then the buffer is presented.
fn draw_frame(canvas: &mut WindowCanvas, texture: &Texture) -> Result<(), ViewerError> {
    canvas.clear();
    status::ok("render / clear");

    status::check(
        "render / copy",
        canvas.copy(texture, None, None),
        ViewerError::Render,
    )?;

    // Present reports no status of its own.
    canvas.present();
    status::info("render / present");

    Ok(())
}
