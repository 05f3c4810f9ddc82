//! Error types for budgetlite-core
//!
//! This module provides error handling for the ledger and its reports,
//! including error codes, severities and suggestions for the user.

use budgetlite_storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Date not in YYYY-MM-DD form or not a calendar day
    InvalidDate,
    /// Month token not in YYYY-MM form
    InvalidMonth,
    /// Field value breaks a transaction invariant
    ValidationError,
    /// Selector outside the current listing
    SelectorOutOfRange,
    /// Saving the ledger failed
    PersistFailed,
    /// Writing the CSV export failed
    ExportFailed,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidDate => write!(f, "INVALID_DATE"),
            ErrorCode::InvalidMonth => write!(f, "INVALID_MONTH"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::SelectorOutOfRange => write!(f, "SELECTOR_OUT_OF_RANGE"),
            ErrorCode::PersistFailed => write!(f, "PERSIST_FAILED"),
            ErrorCode::ExportFailed => write!(f, "EXPORT_FAILED"),
        }
    }
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Bad input, nothing changed
    Warning,
    /// Operation failed; in-memory state may be ahead of the file
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for budgetlite-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid month: {input:?} (expected YYYY-MM)")]
    InvalidMonth { input: String },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("No transaction #{selector} (listing has {len})")]
    SelectorOutOfRange { selector: usize, len: usize },

    #[error("Could not save to {location}: {source}")]
    PersistFailed {
        location: String,
        #[source]
        source: StorageError,
    },

    #[error("Could not export CSV: {source}")]
    ExportFailed {
        #[source]
        source: StorageError,
    },
}

impl CoreError {
    /// Shorthand for a field validation failure
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CoreError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidDate { .. } => ErrorCode::InvalidDate,
            CoreError::InvalidMonth { .. } => ErrorCode::InvalidMonth,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::SelectorOutOfRange { .. } => ErrorCode::SelectorOutOfRange,
            CoreError::PersistFailed { .. } => ErrorCode::PersistFailed,
            CoreError::ExportFailed { .. } => ErrorCode::ExportFailed,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidDate { .. }
            | CoreError::InvalidMonth { .. }
            | CoreError::ValidationError { .. }
            | CoreError::SelectorOutOfRange { .. } => ErrorSeverity::Warning,
            CoreError::PersistFailed { .. } | CoreError::ExportFailed { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InvalidDate { .. } => {
                details = details.with_suggestion("Use YYYY-MM-DD (example: 2026-02-05).".to_string());
            }
            CoreError::InvalidMonth { .. } => {
                details = details.with_suggestion("Use YYYY-MM (example: 2026-02).".to_string());
            }
            CoreError::SelectorOutOfRange { len, .. } => {
                details = details.with_suggestion(format!("Pick a number from 1 to {}.", len));
            }
            CoreError::PersistFailed { location, .. } => {
                details = details.with_suggestion(
                    "The change is kept for this session but is not on disk.".to_string()
                );
                details = details.with_suggestion(format!(
                    "Check that {} is writable; the next successful save writes everything.",
                    location
                ));
            }
            CoreError::ExportFailed { .. } => {
                details = details.with_suggestion(
                    "Check that the export directory exists and is writable.".to_string()
                );
            }
            CoreError::ValidationError { .. } => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            data: serde_json::json!({}),
        }
    }

    /// Add context data
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Error => log::error!(
                target: "budgetlite::error",
                "[{}] {} - Operation: {} - Data: {}",
                error.code(),
                error,
                context.operation,
                context.data
            ),
            ErrorSeverity::Warning => log::warn!(
                target: "budgetlite::error",
                "[{}] {} - Operation: {} - Data: {}",
                error.code(),
                error,
                context.operation,
                context.data
            ),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InvalidDate.to_string(), "INVALID_DATE");
        assert_eq!(ErrorCode::SelectorOutOfRange.to_string(), "SELECTOR_OUT_OF_RANGE");
        assert_eq!(ErrorCode::PersistFailed.to_string(), "PERSIST_FAILED");
    }

    #[test]
    fn test_core_error_severity() {
        let error = CoreError::validation("amount", "must be greater than 0");
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert_eq!(error.code(), ErrorCode::ValidationError);

        let error = CoreError::PersistFailed {
            location: "data.json".to_string(),
            source: StorageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
        };
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert!(error.to_string().contains("data.json"));
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_details_selector() {
        let error = CoreError::SelectorOutOfRange { selector: 7, len: 3 };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::SelectorOutOfRange);
        assert!(details.message.contains("#7"));
        assert_eq!(details.suggestions, vec!["Pick a number from 1 to 3.".to_string()]);
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("delete").with_data("selector", serde_json::json!(2));

        assert_eq!(context.operation, "delete");
        assert_eq!(context.data["selector"], 2);
    }
}
