//! Record error types

use thiserror::Error;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Dynamic record errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Field '{0}' is null")]
    NullValue(String),

    #[error("Field '{field}' has unsupported type {actual}")]
    UnsupportedType { field: String, actual: &'static str },

    #[error("Field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Field '{0}' not found")]
    MissingField(String),

    #[error("Float value is NaN")]
    NotANumber,
}
