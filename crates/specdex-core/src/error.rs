//! Core error types for the Specdex service.
//!
//! `SpecdexError` covers rejected domain input; configuration and pagination
//! have their own enums since callers handle them separately.

use thiserror::Error;

/// Errors raised while checking domain input.
#[derive(Error, Debug)]
pub enum SpecdexError {
    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Rejected page/limit combinations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Page numbers start at 1.
    #[error("page must be a positive integer, got {0}")]
    InvalidPage(i64),

    /// Limit must be between 1 and the configured maximum.
    #[error("limit must be between 1 and {max}, got {limit}")]
    InvalidLimit {
        /// Requested page size
        limit: i64,
        /// Largest accepted page size
        max: u32,
    },
}

/// Result type alias using `SpecdexError`.
pub type Result<T> = std::result::Result<T, SpecdexError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
