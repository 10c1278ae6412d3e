//! Todoterm Error Types
//!
//! Centralized error handling using thiserror for type-safe errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for todoterm
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Remote object store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network-level failure (unreachable host, connection reset, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("{operation} failed: store returned HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    /// The response body could not be parsed into the expected shape
    #[error("malformed {operation} response: {reason}")]
    Parse {
        operation: &'static str,
        reason: String,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// TUI setup and teardown errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal initialization failed: {0}")]
    InitFailed(String),

    #[error("Terminal restoration failed: {0}")]
    RestoreFailed(String),

    #[error("Crossterm error: {0}")]
    Crossterm(#[from] std::io::Error),
}

/// Result type alias for todoterm operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for TUI operations
pub type TuiResult<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Status {
            operation: "create",
            status: 503,
        };
        assert_eq!(err.to_string(), "create failed: store returned HTTP 503");
    }

    #[test]
    fn test_error_conversion() {
        let store_err = StoreError::Parse {
            operation: "list",
            reason: "expected an array".to_string(),
        };
        let todo_err: TodoError = store_err.into();
        assert!(matches!(todo_err, TodoError::Store(_)));
    }
}
