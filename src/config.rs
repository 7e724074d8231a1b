//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Backend address used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub board: BoardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Knowledge backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Zero disables the timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Board behavior
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Re-read the record list after a successful upload
    #[serde(default = "default_refresh_after_upload")]
    pub refresh_after_upload: bool,
}

fn default_refresh_after_upload() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            refresh_after_upload: default_refresh_after_upload(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
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

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> ConfigLoad {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("alfred").join("config.toml")),
            Some(PathBuf::from("/etc/alfred/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file in `paths` that parses. Files that
    /// exist but fail to load are skipped and reported in the result, so
    /// the caller can log them once its subscriber is installed.
    pub fn load_first(paths: &[PathBuf]) -> ConfigLoad {
        Self::load_first_with(paths, |key| std::env::var(key).ok())
    }

    fn load_first_with(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> ConfigLoad {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    return ConfigLoad {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        ConfigLoad {
            config,
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; `ALFRED_API_BASE_URL` beats the
    /// bare `API_BASE_URL` the browser build also reads
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(url) = lookup("ALFRED_API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("ALFRED_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Some(level) = lookup("ALFRED_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ALFRED_LOG_FORMAT") {
            self.logging.format = format;
        }

        self.normalize();
    }

    /// Override the backend address (e.g. from a CLI flag)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim().trim_end_matches('/');
        self.api.base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        };
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub skipped: Vec<ConfigError>,
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
    r#"# AlFred Knowledge Management Configuration
#
# Environment variables override these settings:
# - API_BASE_URL / ALFRED_API_BASE_URL
# - ALFRED_REQUEST_TIMEOUT_SECS
# - ALFRED_LOG_LEVEL
# - ALFRED_LOG_FORMAT

[api]
# Knowledge backend URL
base_url = "http://localhost:8001"

# Request timeout in seconds (0 = no timeout)
request_timeout_secs = 30

[board]
# Re-read the record list after a successful upload
refresh_after_upload = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
