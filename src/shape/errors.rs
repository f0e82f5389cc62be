//! Shape error types

use thiserror::Error;

/// Result type for shape construction
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Shape construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("Radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("Frame must be finite, got {width}x{height}")]
    InvalidFrame { width: f64, height: f64 },
}
