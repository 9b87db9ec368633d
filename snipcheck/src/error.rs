//! Error handling module for the snipcheck CLI.
//!
//! Scanner diagnostics are not errors: they are collected and printed. The
//! types here cover what actually stops a command.

use thiserror::Error;

/// Main error type for the snipcheck CLI application.
#[derive(Error, Debug)]
pub enum SnipError {
    /// Error when the configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when user input is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scan reported diagnostics and they were denied.
    #[error("scan reported {0} diagnostic(s)")]
    Diagnostics(usize),
}

/// Result type alias using SnipError.
pub type Result<T> = std::result::Result<T, SnipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SnipError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = SnipError::Validation("unsupported language 'go'".to_string());
        assert_eq!(err.to_string(), "Validation error: unsupported language 'go'");
    }

    #[test]
    fn test_diagnostics_error_display() {
        assert_eq!(
            SnipError::Diagnostics(2).to_string(),
            "scan reported 2 diagnostic(s)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SnipError = io_err.into();
        assert!(matches!(err, SnipError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SnipError = json_err.into();
        assert!(matches!(err, SnipError::Json(_)));
    }
}
