//! Error types for hotprospects.
//!
//! This module defines all error types used throughout the hotprospects crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::prospect::ProspectId;

/// The main error type for hotprospects operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// No prospect with the given identifier exists.
    #[error("no prospect with id {id}")]
    ProspectNotFound {
        /// The identifier that was looked up.
        id: ProspectId,
    },

    /// An identifier that is neither a UUID nor a unique prefix of one.
    #[error("invalid prospect id '{input}'")]
    InvalidProspectId {
        /// The text that failed to parse.
        input: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Scan Errors ===
    /// The scan payload did not contain exactly two lines.
    #[error("malformed scan payload: expected 2 lines, found {segments}")]
    MalformedScan {
        /// How many newline-separated segments the payload had.
        segments: usize,
    },

    /// The scan source could not produce a payload.
    #[error("scanning failed ({source_name}): {message}")]
    ScanSource {
        /// Name of the scan source.
        source_name: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    // === Notification Errors ===
    /// The notifier refused or failed to schedule a reminder.
    #[error("notifier error: {0}")]
    Notifier(String),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hotprospects operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new notifier error.
    #[must_use]
    pub fn notifier(message: impl Into<String>) -> Self {
        Self::Notifier(message.into())
    }

    /// Create a scan source error.
    #[must_use]
    pub fn scan_source(source_name: &'static str, message: impl Into<String>) -> Self {
        Self::ScanSource {
            source_name,
            message: message.into(),
        }
    }

    /// Check if this error means the prospect does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProspectNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedScan { segments: 3 };
        assert_eq!(
            err.to_string(),
            "malformed scan payload: expected 2 lines, found 3"
        );

        let err = Error::notifier("center unavailable");
        assert_eq!(err.to_string(), "notifier error: center unavailable");
    }

    #[test]
    fn test_error_is_not_found() {
        let err = Error::ProspectNotFound {
            id: uuid::Uuid::nil(),
        };
        assert!(err.is_not_found());
        assert!(!Error::notifier("x").is_not_found());
    }

    #[test]
    fn test_not_found_display_contains_id() {
        let id = uuid::Uuid::new_v4();
        let err = Error::ProspectNotFound { id };
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_invalid_id_display() {
        let err = Error::InvalidProspectId {
            input: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "invalid prospect id 'nope'");
    }

    #[test]
    fn test_scan_source_error() {
        let err = Error::scan_source("clipboard", "no text");
        let msg = err.to_string();
        assert!(msg.contains("clipboard"));
        assert!(msg.contains("no text"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "delay_secs must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("delay_secs"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
