//! Error types for the jlext CLI.
//!
//! Tokenizing never fails on its own; every variant here comes from the
//! driver around it (files, configuration, output) or from a policy flag
//! that turns lexical diagnostics into a failing exit status.

use thiserror::Error;

/// Main error type for the jlext CLI application.
#[derive(Error, Debug)]
pub enum JlextError {
    /// Error when configuration is missing, malformed or cannot be applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when tokenizing produced diagnostics the caller asked to fail on.
    #[error("Lexical error: {0}")]
    Lexical(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JlextError.
pub type Result<T> = std::result::Result<T, JlextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = JlextError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = JlextError::Validation("jobs must be at least 1".to_string());
        assert_eq!(err.to_string(), "Validation error: jobs must be at least 1");
    }

    #[test]
    fn test_lexical_error_display() {
        let err = JlextError::Lexical("2 unknown tokens".to_string());
        assert_eq!(err.to_string(), "Lexical error: 2 unknown tokens");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: JlextError = io_err.into();
        assert!(matches!(err, JlextError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: JlextError = json_err.into();
        assert!(matches!(err, JlextError::Json(_)));
    }
}
