//! Configuration management for Specdex.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SPECDEX_CONFIG";

/// Main application configuration.
///
/// This is loaded from `~/.config/specdex/config.toml` (or platform equivalent),
/// or from the file named by `SPECDEX_CONFIG`. If the file doesn't exist,
/// default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Relational store settings
    pub database: DatabaseConfig,
    /// Query limits for the public API
    pub api: ApiConfig,
    /// Refresh job settings
    pub scraper: ScraperConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => PathBuf::from(path),
            Err(_) => Self::config_path()?,
        };
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `SPECDEX_BIND`: Override the listen address
    /// - `SPECDEX_DATABASE_PATH`: Override the database file
    /// - `SPECDEX_CATALOG_PATH`: Override the catalog used by refresh jobs
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SPECDEX_BIND") {
            tracing::debug!("Override server.bind from env: {}", val);
            self.server.bind = val;
        }

        if let Ok(val) = std::env::var("SPECDEX_DATABASE_PATH") {
            tracing::debug!("Override database.path from env: {}", val);
            self.database.path = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("SPECDEX_CATALOG_PATH") {
            tracing::debug!("Override scraper.catalog_path from env: {}", val);
            self.scraper.catalog_path = Some(PathBuf::from(val));
        }
    }

    /// Reject limits that would make every request fail.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.search_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.api.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.max_page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.api.default_page_size == 0 || self.api.default_page_size > self.api.max_page_size
        {
            return Err(ConfigError::InvalidValue {
                field: "api.default_page_size".to_string(),
                reason: format!("must be between 1 and {}", self.api.max_page_size),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the database file, defaulting to the XDG data directory.
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("specdex.db")),
        }
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/specdex/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "specdex", "specdex").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/specdex`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "specdex", "specdex").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8000`
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Relational store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file (defaults to the data directory)
    pub path: Option<PathBuf>,
    /// Connection pool size
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: 5,
        }
    }
}

/// Query limits for the public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Maximum number of devices returned by a name search
    pub search_limit: u32,
    /// Longest accepted search query, in characters
    pub max_query_len: usize,
    /// Page size used when `limit` is omitted
    pub default_page_size: u32,
    /// Largest accepted `limit`
    pub max_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_limit: 25,
            max_query_len: 100,
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Refresh job settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// JSON catalog imported by `/update_db` (refresh is a no-op when unset)
    pub catalog_path: Option<PathBuf>,
}
