//! Configuration system
//!
//! Serde-backed configuration for the viewer, with defaults matching the
//! classic hello-world setup: a centered 512x512 window, an accelerated
//! renderer, and `sample.png` from the working directory.

use serde::{Deserialize, Serialize};

/// Top-level viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Path of the image to display, relative to the working directory
    pub image_path: String,

    /// Upper bound on the interactive loop rate, in frames per second
    pub target_fps: u32,

    /// How long the splash variant holds the frame, in milliseconds
    pub splash_hold_ms: u64,

    /// Window configuration
    pub window: WindowConfig,

    /// Renderer configuration
    pub renderer: RendererConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Request a resizable window.
    ///
    /// Accepted but not applied: the window is always created with default
    /// flags. See DESIGN.md.
    pub resizable: bool,

    /// Request input grab.
    ///
    /// Accepted but not applied, as above.
    pub input_grabbed: bool,
}

/// Renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Request a hardware-accelerated drawing context
    pub accelerated: bool,

    /// Synchronize presents with the display refresh
    pub vsync: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_path: "sample.png".to_string(),
            target_fps: 60,
            splash_hold_ms: 3000,
            window: WindowConfig {
                title: "Hello, SDL world!".to_string(),
                width: 512,
                height: 512,
                resizable: true,
                input_grabbed: true,
            },
            renderer: RendererConfig {
                accelerated: true,
                vsync: false,
            },
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

impl Config for ViewerConfig {}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.title, "Hello, SDL world!");
        assert_eq!(config.window.width, 512);
        assert_eq!(config.window.height, 512);
        assert!(config.window.resizable);
        assert!(config.window.input_grabbed);
        assert!(config.renderer.accelerated);
        assert!(!config.renderer.vsync);
        assert_eq!(config.image_path, "sample.png");
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.splash_hold_ms, 3000);
    }

    #[test]
    fn toml_round_trip_preserves_the_config() {
        let mut config = ViewerConfig::default();
        config.window.title = "Round trip".to_string();
        config.target_fps = 30;

        let text = toml::to_string_pretty(&config).unwrap();
        let back: ViewerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.window.title, "Round trip");
        assert_eq!(back.target_fps, 30);
        assert_eq!(back.splash_hold_ms, config.splash_hold_ms);
    }

    #[test]
    fn load_and_save_round_trip_through_a_file() {
        let path = std::env::temp_dir().join("viewer_config_round_trip.toml");
        let path = path.to_str().unwrap().to_string();

        let config = ViewerConfig::default();
        config.save_to_file(&path).unwrap();
        let back = ViewerConfig::load_from_file(&path).unwrap();
        assert_eq!(back.window.width, config.window.width);
        assert_eq!(back.image_path, config.image_path);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = ViewerConfig::default().save_to_file("viewer.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
