//! Unified error hierarchy for the fitness tracker
//!
//! Every failure a record can hit on its way from raw sensor values to a
//! rendered summary is a variant here, so callers can match on the exact
//! cause instead of inspecting strings.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all fitness tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Activity code outside the recognized set
    #[error("Unknown activity code: '{code}' (expected one of SWM, RUN, WLK)")]
    UnknownActivityCode { code: String },

    /// Raw value count does not match the variant's field list
    #[error("Activity '{code}' expects {expected} values, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Raw value cannot be bound to its typed field
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },

    /// Calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Input loading errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Output rendering errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Calculation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Division by zero
    #[error("Division by zero in {calculation}")]
    DivisionByZero { calculation: &'static str },

    /// Result is infinite or NaN
    #[error("Non-finite result in {calculation}")]
    NonFinite { calculation: &'static str },
}

/// Input loading errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// No importer handles this file
    #[error("Unsupported input format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Format-specific parsing error
    #[error("Parse error in {format} at {location}: {reason}")]
    ParseError {
        format: &'static str,
        location: String,
        reason: String,
    },

    /// Record without an activity code
    #[error("Record {record} has no activity code")]
    MissingCode { record: usize },
}

/// Output rendering errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Unknown output format name
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Serializer failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fitness tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::UnknownActivityCode { .. } => ErrorSeverity::Warning,
            TrackerError::ArityMismatch { .. } => ErrorSeverity::Warning,
            TrackerError::InvalidField { .. } => ErrorSeverity::Warning,
            TrackerError::Calculation(_) => ErrorSeverity::Error,
            TrackerError::Import(_) | TrackerError::Io(_) => ErrorSeverity::Critical,
            TrackerError::Export(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Calculation(CalculationError::DivisionByZero { calculation }) => {
                format!(
                    "Cannot compute {}: workout duration and walker height must be non-zero",
                    calculation
                )
            }
            TrackerError::ArityMismatch {
                code,
                expected,
                actual,
            } => {
                format!(
                    "Sensor package '{}' must carry {} readings but has {}",
                    code, expected, actual
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Input or output of the whole run failed
    Critical,
    /// Record could not be computed
    Error,
    /// Record was malformed
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message_names_code() {
        let err = TrackerError::UnknownActivityCode {
            code: "FLY".to_string(),
        };
        assert!(err.to_string().contains("'FLY'"));
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_error_severity() {
        let err = TrackerError::Calculation(CalculationError::DivisionByZero {
            calculation: "mean speed",
        });
        assert_eq!(err.severity(), ErrorSeverity::Error);

        let err = TrackerError::Import(ImportError::MissingCode { record: 3 });
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_messages() {
        let err = TrackerError::ArityMismatch {
            code: "RUN".to_string(),
            expected: 3,
            actual: 2,
        };
        assert!(err.user_message().contains("must carry 3 readings but has 2"));
    }
}
