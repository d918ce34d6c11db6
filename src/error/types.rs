//! Error type definitions
//!
//! Defines the error types used by the config store, the host API and the
//! bridge. None of these ever cross the host boundary as a failure: the API
//! layer converts them into an [`ErrorKind`] attached to a safe default.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launch options backend
#[derive(Error, Debug)]
pub enum Error {
    /// The config file location could not be derived from the install directory
    #[error("Path resolution error: {0}")]
    PathResolution(String),

    /// The config file exists but could not be read
    #[error("Failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contents are not valid JSON
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON payload parsed, but its top level is not an object
    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The config file could not be written
    #[error("Failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON handed to `set_config` by the host is invalid
    #[error("Invalid config payload: {0}")]
    InputParse(#[source] serde_json::Error),

    /// Runtime settings errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a degraded call, reported to callers instead of
/// the error itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    PathResolution,
    FileRead,
    Parse,
    FileWrite,
    InputParse,
    Internal,
}

impl ErrorKind {
    /// Stable short name, used in logs and the bridge's degradation header
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PathResolution => "path_resolution",
            ErrorKind::FileRead => "file_read",
            ErrorKind::Parse => "parse",
            ErrorKind::FileWrite => "file_write",
            ErrorKind::InputParse => "input_parse",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new path resolution error
    pub fn path_resolution(msg: impl Into<String>) -> Self {
        Self::PathResolution(msg.into())
    }

    /// Create a not-an-object error describing the JSON value that was found
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::NotAnObject { found }
    }

    /// Classify this error for reporting across the host boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PathResolution(_) => ErrorKind::PathResolution,
            Error::FileRead { .. } => ErrorKind::FileRead,
            Error::Parse { .. } | Error::NotAnObject { .. } => ErrorKind::Parse,
            Error::FileWrite { .. } => ErrorKind::FileWrite,
            Error::InputParse(_) => ErrorKind::InputParse,
            Error::Config(_) | Error::Toml(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test config error");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: test config error");
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("[bridge").unwrap_err();

        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_input_parse_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let err = Error::InputParse(json_err);
        assert_eq!(err.kind(), ErrorKind::InputParse);
        assert!(err.to_string().starts_with("Invalid config payload"));
    }

    #[test]
    fn test_not_an_object() {
        let err = Error::not_an_object(&serde_json::json!([1, 2]));
        assert_eq!(err.to_string(), "Expected a JSON object, found an array");
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_file_write_kind() {
        let err = Error::FileWrite {
            path: PathBuf::from("/nope/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), ErrorKind::FileWrite);
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_error_kind_names() {
        assert_eq!(ErrorKind::FileRead.to_string(), "file_read");
        assert_eq!(
            serde_json::to_string(&ErrorKind::InputParse).unwrap(),
            "\"input_parse\""
        );
    }
}
