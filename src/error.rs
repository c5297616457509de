//! Error types for json-shape
//!
//! Inference itself never fails. Errors come from the caller side: reading
//! and parsing sample files, loading configuration, writing output.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for json-shape
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Cannot read sample '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON input in '{}': {source}", .path.display())]
    SourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a source-unreadable error
    pub fn unreadable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a source-malformed error
    pub fn malformed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::SourceMalformed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type alias for json-shape
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
