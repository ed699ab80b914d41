//! Configuration system
//!
//! Window and display settings loaded from TOML or RON, picked by file
//! extension. Every section has defaults so partial files are accepted.

pub use serde::{Deserialize, Serialize};

use crate::window::{WindowMode, WindowRect};

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
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

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

    /// Values that parsed but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Initial state of a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Initial left edge
    pub x: i32,
    /// Initial top edge
    pub y: i32,
    /// Initial width in pixels
    pub width: i32,
    /// Initial height in pixels
    pub height: i32,
    /// Initial display mode
    pub mode: WindowMode,
    /// DPI scale factor override
    pub dpi_scale_factor: f32,
    /// Show the window right after creation
    pub visible: bool,
}

impl WindowConfig {
    /// Create a window configuration with a title and size
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the initial position
    #[must_use]
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the initial display mode
    #[must_use]
    pub fn with_mode(mut self, mode: WindowMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the DPI scale factor
    #[must_use]
    pub fn with_dpi_scale_factor(mut self, factor: f32) -> Self {
        self.dpi_scale_factor = factor;
        self
    }

    /// Start hidden or shown
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Validate the window section
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for a non-positive size or DPI factor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.dpi_scale_factor.is_nan() || self.dpi_scale_factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "DPI scale factor must be positive, got {}",
                self.dpi_scale_factor
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Monkey".to_string(),
            x: 100,
            y: 100,
            width: 1280,
            height: 720,
            mode: WindowMode::Windowed,
            dpi_scale_factor: 1.0,
            visible: true,
        }
    }
}

/// Bounds of the display windows live on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Left edge of the display
    pub x: i32,
    /// Top edge of the display
    pub y: i32,
    /// Display width in pixels
    pub width: i32,
    /// Display height in pixels
    pub height: i32,
}

impl DisplayConfig {
    /// Display bounds as a rectangle
    pub const fn rect(&self) -> WindowRect {
        WindowRect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
        }
    }
}

/// Top-level configuration for the platform layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Log filter handed to `env_logger`
    pub log_level: String,
    /// Display bounds
    pub display: DisplayConfig,
    /// Main window
    pub window: WindowConfig,
}

impl PlatformConfig {
    /// Create a configuration whose main window carries the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window: WindowConfig {
                title: title.into(),
                ..WindowConfig::default()
            },
            ..Self::default()
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Replace the main window section
    #[must_use]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Validate the entire configuration
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width <= 0 || self.display.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "display size must be positive, got {}x{}",
                self.display.width, self.display.height
            )));
        }
        self.window.validate()
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DisplayConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Config for PlatformConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("platform_window_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlatformConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("round_trip.toml");
        let path_str = path.to_str().unwrap();

        let config = PlatformConfig::new("Editor")
            .with_log_level("debug")
            .with_window(
                WindowConfig::new("Editor", 800, 600)
                    .with_position(5, 6)
                    .with_mode(WindowMode::Fullscreen),
            );
        config.save_to_file(path_str).unwrap();

        let loaded = PlatformConfig::load_from_file(path_str).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("round_trip.ron");
        let path_str = path.to_str().unwrap();

        let config = PlatformConfig::new("Viewer").with_window(
            WindowConfig::new("Viewer", 640, 480).with_mode(WindowMode::WindowedFullscreen),
        );
        config.save_to_file(path_str).unwrap();

        let loaded = PlatformConfig::load_from_file(path_str).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlatformConfig = toml::from_str(
            r#"
            [window]
            title = "Partial"
            mode = "windowed_fullscreen"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Partial");
        assert_eq!(config.window.mode, WindowMode::WindowedFullscreen);
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = PlatformConfig::default().save_to_file("settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

        let err = PlatformConfig::load_from_file("settings.yaml").unwrap_err();
        // Missing file is reported before the extension is looked at
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_width = PlatformConfig::default().with_window(WindowConfig::new("Bad", 0, 600));
        assert!(matches!(zero_width.validate(), Err(ConfigError::Invalid(_))));

        let bad_dpi = PlatformConfig::default()
            .with_window(WindowConfig::default().with_dpi_scale_factor(0.0));
        assert!(matches!(bad_dpi.validate(), Err(ConfigError::Invalid(_))));

        let nan_dpi = PlatformConfig::default()
            .with_window(WindowConfig::default().with_dpi_scale_factor(f32::NAN));
        assert!(nan_dpi.validate().is_err());

        let mut bad_display = PlatformConfig::default();
        bad_display.display.height = 0;
        assert!(bad_display.validate().is_err());
    }
}
