//! Configuration loading for the shifts CLI.
//!
//! Configuration is read from an optional TOML file (default:
//! `<config dir>/shifts.toml`). Every field has a default, so a missing file
//! or a partial one is fine. Command-line flags are applied on top.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use shifts_client::{ApiConfig, StoreConfig, DEFAULT_BASE_URL, DEFAULT_COORDINATES};
use shifts_core::{ErrorReporting, WindowConfig, DEFAULT_INITIAL_NUM_TO_RENDER};
use shifts_types::Coordinates;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "shifts.toml";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Shifts endpoint.
    #[serde(default)]
    pub api: ApiSection,
    /// Search position.
    #[serde(default)]
    pub location: LocationSection,
    /// Store behaviour.
    #[serde(default)]
    pub store: StoreSection,
    /// List windowing.
    #[serde(default)]
    pub list: ListSection,
}

/// `[api]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiSection {
    /// Endpoint host (default: production).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// `[location]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationSection {
    /// Latitude in degrees.
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

/// `[store]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoreSection {
    /// Show the failure's own message instead of the generic one.
    #[serde(default)]
    pub detailed_errors: bool,
}

/// `[list]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListSection {
    /// Row height in viewport units (default: 96).
    #[serde(default = "default_row_height")]
    pub row_height: u32,
    /// Rows kept beyond each edge of the viewport (default: 3).
    #[serde(default = "default_overscan")]
    pub overscan: usize,
    /// Rows shown before the viewport is known (default: 10).
    #[serde(default = "default_initial_num_to_render")]
    pub initial_num_to_render: usize,
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_latitude() -> f64 {
    DEFAULT_COORDINATES.latitude
}

fn default_longitude() -> f64 {
    DEFAULT_COORDINATES.longitude
}

fn default_row_height() -> u32 {
    96
}

fn default_overscan() -> usize {
    3
}

fn default_initial_num_to_render() -> usize {
    DEFAULT_INITIAL_NUM_TO_RENDER
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            overscan: default_overscan(),
            initial_num_to_render: default_initial_num_to_render(),
        }
    }
}

/// Values given on the command line. `None` keeps the file's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub base_url: Option<String>,
    pub detailed_errors: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(latitude) = overrides.latitude {
            self.location.latitude = latitude;
        }
        if let Some(longitude) = overrides.longitude {
            self.location.longitude = longitude;
        }
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url = base_url.clone();
        }
        if overrides.detailed_errors {
            self.store.detailed_errors = true;
        }
        self
    }

    /// Search position.
    pub fn coordinates(&self) -> Result<Coordinates, ConfigError> {
        let coordinates = Coordinates::new(self.location.latitude, self.location.longitude);
        if coordinates.is_valid() {
            Ok(coordinates)
        } else {
            Err(ConfigError::InvalidCoordinates(coordinates))
        }
    }

    /// Endpoint client configuration.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::default()
            .with_base_url(&self.api.base_url)
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    /// Store configuration.
    pub fn store_config(&self) -> StoreConfig {
        let reporting = if self.store.detailed_errors {
            ErrorReporting::Detailed
        } else {
            ErrorReporting::Generic
        };
        StoreConfig::default().with_error_reporting(reporting)
    }

    /// List windowing configuration.
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::default()
            .with_row_height(self.list.row_height)
            .with_overscan(self.list.overscan)
            .with_initial_num_to_render(self.list.initial_num_to_render)
    }
}

/// `<config dir>/shifts.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("pro", "handswork", "shifts")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
    /// Latitude/longitude out of range.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(Coordinates),
}
