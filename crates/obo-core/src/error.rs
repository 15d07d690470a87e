use thiserror::Error;

/// Core error type reported by components back to their host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A configured input (path, mode, column list) was rejected before any work started
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input file content could not be parsed
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// Required configuration was missing or had the wrong shape
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Input/output error
    #[error("Input/output error: {0}")]
    IOError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Component error
    #[error("Component error: {0}")]
    ComponentError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::IOError(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        CoreError::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        CoreError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_error_display() {
        let errors = vec![
            (CoreError::InvalidInput("bad path".to_string()), "Invalid input: bad path"),
            (CoreError::ParseFailure("line 3".to_string()), "Parse failure: line 3"),
            (CoreError::ConfigurationError("config_err".to_string()), "Configuration error: config_err"),
            (CoreError::IOError("io_err".to_string()), "Input/output error: io_err"),
            (CoreError::SerializationError("ser_err".to_string()), "Serialization error: ser_err"),
            (CoreError::ComponentError("comp_err".to_string()), "Component error: comp_err"),
            (CoreError::Other("other_err".to_string()), "other_err"),
        ];

        for (error, expected_msg) in errors {
            assert_eq!(error.to_string(), expected_msg);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: CoreError = json_error.into();

        match error {
            CoreError::SerializationError(msg) => {
                assert!(msg.contains("expected value"));
            }
            _ => panic!("Expected SerializationError variant"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_error = IoError::new(ErrorKind::PermissionDenied, "permission denied");
        let error: CoreError = io_error.into();

        match error {
            CoreError::IOError(msg) => {
                assert!(msg.contains("permission denied"));
            }
            _ => panic!("Expected IOError variant"),
        }
    }

    #[test]
    fn test_from_str() {
        let error: CoreError = "test error message".into();
        assert_eq!(error, CoreError::Other("test error message".to_string()));
    }
}
