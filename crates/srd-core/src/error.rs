//! # Error Types
//!
//! Errors raised by the domain layer. The HTTP layer in `srd-mcp` has its own
//! error type and wraps these where it needs to.

use thiserror::Error;

/// Errors that can occur in the SRD domain layer.
///
/// - No silent failures
/// - Use `Result<T>` for fallible operations
/// - Nothing in this crate panics; every error is recoverable
#[derive(Debug, Error)]
pub enum SrdError {
    /// The given name does not match any upstream category.
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    /// A tool argument is outside the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value could not be serialized to JSON text.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SrdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result alias for the domain layer.
pub type Result<T> = std::result::Result<T, SrdError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_names_the_input() {
        let err = SrdError::UnknownCategory("dragons".to_string());
        assert_eq!(err.to_string(), "Unknown category: 'dragons'");
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SrdError = json_err.into();
        assert!(matches!(err, SrdError::Serialization(_)));
    }
}
