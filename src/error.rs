//! Unified error types for the resume-tui application.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::SimpleFieldKind;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No data directory available for this user")]
    DataDirUnavailable,

    #[error("Failed to write store at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print/export pipeline errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write print document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Print command failed: {0}")]
    PrintCommand(String),
}

/// A failed precondition of the print pipeline.
///
/// Not an [`AppError`]: the session recovers by aborting the export,
/// showing the message and focusing [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    MissingName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// The field that must receive focus after the failure
    pub fn field(&self) -> SimpleFieldKind {
        match self {
            Self::MissingName => SimpleFieldKind::Name,
            Self::MissingEmail | Self::InvalidEmail => SimpleFieldKind::Email,
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_into_app_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_err: AppError = StoreError::from(io_err).into();
        assert!(matches!(app_err, AppError::Store(StoreError::Io(_))));
        assert!(app_err.to_string().contains("read-only"));
    }

    #[test]
    fn test_validation_messages_name_their_field() {
        assert_eq!(
            ValidationError::MissingName.to_string(),
            "Please enter your full name"
        );
        assert_eq!(ValidationError::MissingName.field(), SimpleFieldKind::Name);
        assert_eq!(ValidationError::InvalidEmail.field(), SimpleFieldKind::Email);
    }
}
