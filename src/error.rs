//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entry-path validation errors (raised before any write)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A recurring rule's day does not exist in the target month
    #[error("Invalid date: day {day} does not exist in {year}-{month:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The change was saved but its audit entry could not be appended
    #[error("Saved ({change}), but the audit log could not be written: {reason}")]
    AuditWrite { change: String, reason: String },
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage-level failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_) | Self::Json(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = TrackerError::InvalidDate {
            year: 2025,
            month: 2,
            day: 31,
        };
        assert_eq!(
            err.to_string(),
            "Invalid date: day 31 does not exist in 2025-02"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(TrackerError::Validation("empty name".into()).is_validation());
        assert!(TrackerError::Storage("disk full".into()).is_storage());
        assert!(!TrackerError::Export("closed".into()).is_storage());
    }

    #[test]
    fn test_audit_write_says_change_was_saved() {
        let err = TrackerError::AuditWrite {
            change: "created expense exp-3".into(),
            reason: "Is a directory".into(),
        };
        assert_eq!(
            err.to_string(),
            "Saved (created expense exp-3), but the audit log could not be written: Is a directory"
        );
        assert!(!err.is_storage());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
