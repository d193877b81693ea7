//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog extraction errors
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue {
        /// The offending config field, dotted path form
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from extracting the latest release block out of a changelog
/// document.
///
/// All of these are fatal: extraction either yields the full latest
/// release or nothing at all.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document does not start with a release header line
    #[error("No release header found at the start of the changelog")]
    NoReleaseHeader,

    /// The release header is not underlined with dashes
    #[error("Release header is not followed by a dash underline")]
    MissingUnderline,

    /// The release block contains no bullet items
    #[error("Latest release block contains no items")]
    NoItems,
}

impl RelnotesError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
