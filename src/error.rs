//! Error types for stowbox
//!
//! Library code returns `BoxResult`; the CLI wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stowbox operations
pub type BoxResult<T> = Result<T, BoxError>;

/// Main error type for stowbox operations
#[derive(Error, Debug)]
pub enum BoxError {
    /// Saved configuration does not exist
    #[error("config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Saved configuration uses a structure this build cannot read
    #[error("incompatible format version '{found}' in {file} (expected {expected})")]
    IncompatibleFormat {
        file: PathBuf,
        found: String,
        expected: String,
    },

    /// Configuration document could not be parsed
    #[error("invalid config document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// Tool settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// Unknown value for a closed option set
    #[error("unknown {option} '{value}' (expected one of: {expected})")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: String,
    },

    /// Unknown preset name
    #[error("unknown preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    /// Rule lookup by name failed
    #[error("rule not found: {name}")]
    UnknownRule { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl BoxError {
    /// File associated with the error, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            BoxError::ConfigNotFound { path } => Some(path),
            BoxError::IncompatibleFormat { file, .. }
            | BoxError::InvalidDocument { file, .. }
            | BoxError::InvalidSettings { file, .. } => Some(file),
            _ => None,
        }
    }
}
