//! Error types for yqlkit

use thiserror::Error;

/// The main error type for yqlkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or unusable
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The executor reported a failure code for a statement
    #[error("Query execution failed with code {code}")]
    Execution { code: u16 },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for yqlkit operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new execution error for the given failure code
    pub fn execution(code: u16) -> Self {
        Self::Execution { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::invalid_argument("Table name required");
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Invalid argument: Table name required");
    }

    #[test]
    fn test_execution_error() {
        let err = Error::execution(500);
        assert!(matches!(err, Error::Execution { code: 500 }));
        assert_eq!(err.to_string(), "Query execution failed with code 500");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
