//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::{ThemePreference, ThemeStyle};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the CLI keeps its key-value store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("onboard").to_string_lossy().to_string())
        .unwrap_or_else(|| "./onboard_data".to_string())
}

fn default_file_name() -> String {
    "store.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
        }
    }
}

impl StoreConfig {
    /// Full path of the store file, with a leading `~/` expanded
    pub fn path(&self) -> PathBuf {
        let data_dir = match (self.data_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.data_dir),
        };
        data_dir.join(&self.file_name)
    }
}

/// Appearance used until the user stores a preference
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub dark_mode: bool,

    /// Unrecognised names fall back to `modern`
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    ThemeStyle::Modern.as_str().to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            style: default_style(),
        }
    }
}

impl ThemeConfig {
    pub fn preference(&self) -> ThemePreference {
        ThemePreference::new(self.dark_mode, ThemeStyle::from_name(&self.style))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is set up, so files that exist but fail to load
    /// are handed back for the caller to report.
    pub fn load_default() -> (Self, Vec<ConfigError>) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("onboard").join("config.toml")),
            Some(PathBuf::from("./onboard.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first of `paths` that exists and parses
    ///
    /// Missing files are skipped silently. Falls back to the environment
    /// when none loads.
    pub fn load_first(paths: &[PathBuf]) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => return (config, errors),
                    Err(e) => errors.push(e),
                }
            }
        }

        (Self::from_env(), errors)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(data_dir) = std::env::var("ONBOARD_DATA_DIR") {
            self.store.data_dir = data_dir;
        }

        if let Ok(level) = std::env::var("ONBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ONBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Onboard Configuration
#
# Environment variables override these settings:
# - ONBOARD_DATA_DIR
# - ONBOARD_LOG_LEVEL
# - ONBOARD_LOG_FORMAT

[store]
# Directory holding the key-value store file
data_dir = "~/.local/share/onboard"

# Store file name inside data_dir
file_name = "store.json"

[theme]
# Appearance used until a preference has been saved
dark_mode = false

# modern, classic or minimal
style = "modern"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/onboard/onboard.log"
"#
    .to_string()
}
