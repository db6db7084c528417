//! Configuration file support for huewheel.
//!
//! Settings are stored as pretty-printed JSON. Every preference has a
//! default, so partial files load fine.

use std::path::Path;
use std::str::FromStr;

use huewheel_color::{Argb, HexParseError, parse_hex6};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLOR_HEX, DEFAULT_DIVISION_COUNT, DEFAULT_PLANE_RANGE, DEFAULT_WHEEL_RADIUS,
    MAX_DIVISION_COUNT, MAX_RASTER_EXTENT, MIN_DIVISION_COUNT, MIN_RASTER_EXTENT,
};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive level name, as accepted on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::all()
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = LogLevel::all().iter().map(LogLevel::name).collect();
                format!("unknown log level '{}', expected one of {}", s, names.join(", "))
            })
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

fn default_app_name() -> String {
    "huewheel".to_string()
}

/// Picker preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Number of palette hues
    #[serde(default = "default_division_count")]
    pub division_count: usize,

    /// Traverse palette hues clockwise
    #[serde(default)]
    pub reverse: bool,

    /// Startup color as six hex digits
    #[serde(default = "default_initial_color")]
    pub initial_color: String,

    /// Hue wheel radius in pixels
    #[serde(default = "default_wheel_radius")]
    pub wheel_radius: u32,

    /// SV plane coordinate range in pixels
    #[serde(default = "default_plane_range")]
    pub plane_range: u32,

    /// Default export folder path (empty means the working directory)
    #[serde(default)]
    pub export_folder: String,
}

fn default_division_count() -> usize {
    DEFAULT_DIVISION_COUNT
}

fn default_initial_color() -> String {
    DEFAULT_COLOR_HEX.to_string()
}

fn default_wheel_radius() -> u32 {
    DEFAULT_WHEEL_RADIUS
}

fn default_plane_range() -> u32 {
    DEFAULT_PLANE_RANGE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            division_count: default_division_count(),
            reverse: false,
            initial_color: default_initial_color(),
            wheel_radius: default_wheel_radius(),
            plane_range: default_plane_range(),
            export_folder: String::new(),
        }
    }
}

impl Preferences {
    /// The startup color, parsed.
    pub fn initial_color(&self) -> Result<Argb, ConfigError> {
        Ok(parse_hex6(&self.initial_color)?)
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: Preferences::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    ///
    /// Rejects files from a newer format version and invalid startup colors;
    /// an out-of-range division count or raster geometry is clamped.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.preferences.initial_color()?;

        let count = config.preferences.division_count;
        let clamped = count.clamp(MIN_DIVISION_COUNT, MAX_DIVISION_COUNT);
        if clamped != count {
            log::warn!("Config division count {} out of range, using {}", count, clamped);
            config.preferences.division_count = clamped;
        }

        let preferences = &mut config.preferences;
        preferences.wheel_radius = clamp_extent("wheel radius", preferences.wheel_radius);
        preferences.plane_range = clamp_extent("plane range", preferences.plane_range);

        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "huewheel-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("huewheel").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("huewheel")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)
    }
}

fn clamp_extent(name: &str, extent: u32) -> u32 {
    let clamped = extent.clamp(MIN_RASTER_EXTENT, MAX_RASTER_EXTENT);
    if clamped != extent {
        log::warn!("Config {} {} out of range, using {}", name, extent, clamped);
    }
    clamped
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Startup color is not six hex digits
    #[error("Invalid initial color: {0}")]
    InvalidColor(#[from] HexParseError),
}
