//! Platform bootstrap
//!
//! Acquires the SDL handles the viewer needs, strictly front to back:
//! subsystem token, window, accelerated canvas, texture factory. Any failure
//! aborts the sequence; whatever was already acquired is released by
//! ownership, in reverse order.

use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};

use crate::config::{RendererConfig, WindowConfig};
use crate::foundation::scoped::Scoped;
use crate::foundation::status;
use crate::viewer::ViewerError;

/// Live platform handles.
///
/// Field order is the reverse of acquisition order; struct drop glue tears
/// the stage down back to front, ending with the subsystem token.
pub struct Stage {
    /// Texture factory tied to the canvas.
    pub creator: TextureCreator<WindowContext>,
    /// Accelerated drawing context; owns the window.
    pub canvas: WindowCanvas,
    #[allow(dead_code)] // held so the subsystem outlives the canvas
    video: VideoSubsystem,
    platform: Scoped<Sdl>,
}

impl Stage {
    /// Run the bootstrap sequence from `window_cfg` and `renderer_cfg`.
    pub fn acquire(
        window_cfg: &WindowConfig,
        renderer_cfg: &RendererConfig,
    ) -> Result<Self, ViewerError> {
        let sdl = status::check("platform / init", sdl2::init(), ViewerError::Init)?;
        let platform = Scoped::new(sdl, |_| status::info("platform / quit"));

        let video = status::check(
            "platform / video subsystem",
            platform.video(),
            ViewerError::Init,
        )?;

        let window = status::check(
            "platform / create window",
            create_window(&video, window_cfg),
            ViewerError::Window,
        )?;

        let canvas = status::check(
            "platform / create renderer",
            create_canvas(window, renderer_cfg),
            ViewerError::Renderer,
        )?;

        let creator = canvas.texture_creator();

        Ok(Self {
            creator,
            canvas,
            video,
            platform,
        })
    }

    /// Non-blocking event queue for the interactive loop.
    pub fn event_pump(&self) -> Result<EventPump, ViewerError> {
        status::check(
            "platform / event pump",
            self.platform.event_pump(),
            ViewerError::Init,
        )
    }
}

/// Create the display surface: titled, centered, fixed size.
///
/// The resizable and input-grab requests in the config are accepted but not
/// applied; the window always comes up with default flags. See DESIGN.md.
fn create_window(video: &VideoSubsystem, cfg: &WindowConfig) -> Result<Window, String> {
    log::debug!(
        "Creating {}x{} window \"{}\"",
        cfg.width,
        cfg.height,
        cfg.title
    );
    video
        .window(&cfg.title, cfg.width, cfg.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())
}

/// Create the drawing context bound to `window`.
fn create_canvas(window: Window, cfg: &RendererConfig) -> Result<WindowCanvas, String> {
    let mut builder = window.into_canvas();
    if cfg.accelerated {
        builder = builder.accelerated();
    }
    if cfg.vsync {
        builder = builder.present_vsync();
    }
    builder.build().map_err(|e| e.to_string())
}
