//! Application configuration
//!
//! Configuration is a small JSON document. It is looked up in the user's
//! config directory first, then next to the binary's assets, and falls back
//! to built-in defaults when neither exists or cannot be read.
//!
//! ```json
//! {
//!     "fps": 60,
//!     "window_title": "Path Finding Visualizer",
//!     "start_resolution": "1280x720",
//!     "logo_path": "assets/main_icon.png"
//! }
//! ```

use crate::logging;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory
const LOCAL_CONFIG_PATH: &str = "assets/config/app.json";

/// The three selectable display resolutions
///
/// Each resolution fixes the grid density used by the visualizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Hd,
    Medium,
    Large,
}

impl Resolution {
    /// All resolutions in settings menu order
    pub const ALL: [Resolution; 3] = [Resolution::Hd, Resolution::Medium, Resolution::Large];

    /// Button caption, also used in the config file
    pub fn caption(&self) -> &'static str {
        match self {
            Resolution::Hd => "1280x720",
            Resolution::Medium => "1400x840",
            Resolution::Large => "1500x900",
        }
    }

    pub fn from_caption(caption: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.caption() == caption)
    }

    /// Window size in pixels
    pub fn size(&self) -> (u32, u32) {
        match self {
            Resolution::Hd => (1280, 720),
            Resolution::Medium => (1400, 840),
            Resolution::Large => (1500, 900),
        }
    }

    /// Grid columns a visualizer uses at this resolution
    pub fn grid_columns(&self) -> u32 {
        match self {
            Resolution::Hd => 80,
            Resolution::Medium => 100,
            Resolution::Large => 150,
        }
    }

    pub fn display(&self) -> DisplayConfig {
        let (width, height) = self.size();
        DisplayConfig {
            width,
            height,
            columns: self.grid_columns(),
        }
    }
}

/// Display size and grid density handed to every screen
///
/// Screens receive this by value when they are constructed. Nothing reads
/// it back from the window; a settings change produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub columns: u32,
}

/// Errors raised while loading the configuration file
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    InvalidValue { field: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value for '{}': {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

/// Application settings read at startup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Target frames per second for every screen (0 disables pacing)
    pub fps: u32,
    pub window_title: String,
    /// Caption of the resolution the first main menu opens with
    pub start_resolution: String,
    /// Background logo drawn on every menu screen
    pub logo_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            fps: 60,
            window_title: "Path Finding Visualizer".to_string(),
            start_resolution: Resolution::Hd.caption().to_string(),
            logo_path: "assets/main_icon.png".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.start()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the first config file found, or the defaults
    ///
    /// A file that exists but fails to load is reported and skipped.
    pub fn load_or_default() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    logging::info(&format!("Loaded config from {}", path.display()));
                    return config;
                }
                Err(e) => {
                    logging::warn(&format!("Ignoring config {}: {}", path.display(), e));
                }
            }
        }

        logging::info("No config file found, using defaults");
        AppConfig::default()
    }

    /// Candidate config files, highest priority first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("path_visualizer").join("config.json"));
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_PATH));
        paths
    }

    /// Resolution the application starts in
    pub fn start(&self) -> Result<Resolution, ConfigError> {
        Resolution::from_caption(&self.start_resolution).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "start_resolution",
                value: self.start_resolution.clone(),
            }
        })
    }
}
