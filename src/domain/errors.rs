//! Domain error types
//!
//! This module defines the error hierarchy for tsexport. All errors are
//! domain-specific and don't expose third-party types.

use crate::domain::ids::SeriesFid;
use std::path::PathBuf;
use thiserror::Error;

/// Main tsexport error type
///
/// This is the primary error type used throughout the application.
/// Any variant other than a locally recovered path resolution failure is
/// fatal to the whole export run: there is no partial-success concept since
/// the only result is a root path implying completeness.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Invalid export pattern (empty, or unterminated placeholder syntax)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Two series resolved to the same destination path
    #[error("Duplicate path '{}': series '{first}' and '{second}' resolve to the same file", .path.display())]
    DuplicatePath {
        /// Resolved path both series mapped to
        path: PathBuf,
        /// Series that registered the path first
        first: SeriesFid,
        /// Series whose registration collided
        second: SeriesFid,
    },

    /// Directory creation or file write error
    #[error("I/O error on '{}': {message}", .path.display())]
    Io {
        /// Path the operation was targeting
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Dataset backend errors, propagated unchanged
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Dataset backend errors
///
/// Errors raised by the external dataset collaborator (series listing,
/// metadata or point fetches). These don't expose the backend's own types.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Dataset does not exist in the backing store
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Series does not exist in the backing store
    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    /// Backend storage could not be read
    #[error("Failed to read backend storage: {0}")]
    ReadFailed(String),

    /// Backend payload could not be decoded
    #[error("Invalid backend data: {0}")]
    InvalidData(String),
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_display() {
        let err = ExportError::Pattern("pattern must not be empty".to_string());
        assert_eq!(err.to_string(), "Pattern error: pattern must not be empty");
    }

    #[test]
    fn test_duplicate_path_display_names_both_series() {
        let err = ExportError::DuplicatePath {
            path: PathBuf::from("ds1/ny.csv"),
            first: SeriesFid::new("A").unwrap(),
            second: SeriesFid::new("B").unwrap(),
        };
        let message = err.to_string();
        assert!(message.contains("ds1/ny.csv"));
        assert!(message.contains("'A'"));
        assert!(message.contains("'B'"));
    }

    #[test]
    fn test_backend_error_conversion() {
        let backend_err = BackendError::DatasetNotFound("DS1".to_string());
        let export_err: ExportError = backend_err.into();
        assert!(matches!(export_err, ExportError::Backend(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let export_err: ExportError = toml_err.into();
        assert!(matches!(export_err, ExportError::Configuration(_)));
        assert!(export_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_export_error_implements_std_error() {
        let err = ExportError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_backend_error_implements_std_error() {
        let err = BackendError::ReadFailed("disk gone".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
