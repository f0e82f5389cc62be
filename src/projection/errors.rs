//! Projection error types

use thiserror::Error;

/// Result type for projection operations
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Projection and sorting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// A field value has no defined order (e.g. NaN)
    #[error("Field '{field}' of record {index} is not comparable")]
    Incomparable {
        /// Field name
        field: &'static str,
        /// Position of the offending record in the input
        index: usize,
    },

    /// Two field values could not be ordered against each other
    #[error("Field '{field}' has values with no defined order")]
    Unordered {
        /// Field name
        field: &'static str,
    },
}
