//! Error handling for the fallible outer surfaces
//!
//! Cleaning itself never fails: unbalanced markup is left as text and
//! unparseable formulas are reported as diagnostics. Errors only arise when
//! loading configuration or doing I/O on behalf of the CLI.

use std::fmt;

/// Error type for configuration loading and I/O
#[derive(Debug, Clone)]
pub enum CleanError {
    /// Namespace configuration could not be parsed
    InvalidConfig { message: String },
    /// A namespace required for link recognition is absent from the configuration
    MissingNamespace { name: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::InvalidConfig { message } => {
                write!(f, "Invalid namespace configuration: {}", message)
            }
            CleanError::MissingNamespace { name } => {
                write!(f, "Namespace '{}' missing from configuration", name)
            }
            CleanError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for CleanError {}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        CleanError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        CleanError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Result type for configuration and I/O operations
pub type CleanResult<T> = Result<T, CleanError>;

impl CleanError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CleanError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn missing_namespace(name: impl Into<String>) -> Self {
        CleanError::MissingNamespace { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = CleanError::invalid_config("expected object");
        let msg = err.to_string();
        assert!(msg.contains("namespace configuration"));
        assert!(msg.contains("expected object"));
    }

    #[test]
    fn test_missing_namespace_display() {
        let err = CleanError::missing_namespace("Category");
        assert_eq!(
            err.to_string(),
            "Namespace 'Category' missing from configuration"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CleanError = io.into();
        assert!(matches!(err, CleanError::IoError { .. }));
        assert!(err.to_string().contains("no such file"));
    }
}
