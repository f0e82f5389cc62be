//! CLI-specific error types
//!
//! Every error carries a stable code that is echoed in the JSON error
//! response.

use std::fmt;
use std::io;

use crate::projection::ProjectionError;
use crate::record::RecordError;
use crate::shape::ShapeError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout, JSON encoding)
    IoError,
    /// Input rejected by validation
    InvalidInput,
    /// Field name not known for the record type
    UnknownField,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SUI_CLI_CONFIG_ERROR",
            Self::IoError => "SUI_CLI_IO_ERROR",
            Self::InvalidInput => "SUI_CLI_INVALID_INPUT",
            Self::UnknownField => "SUI_CLI_UNKNOWN_FIELD",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Invalid input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Unknown field
    pub fn unknown_field(field: &str, known: &[&str]) -> Self {
        Self::new(
            CliErrorCode::UnknownField,
            format!("Unknown field '{}'. Known fields: {}", field, known.join(", ")),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<RecordError> for CliError {
    fn from(e: RecordError) -> Self {
        Self::invalid_input(e.to_string())
    }
}

impl From<ShapeError> for CliError {
    fn from(e: ShapeError) -> Self {
        Self::invalid_input(e.to_string())
    }
}

impl From<ProjectionError> for CliError {
    fn from(e: ProjectionError) -> Self {
        Self::invalid_input(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
