//! Error types and exit codes for malha
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad dataset, bad node, contract violation)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the malha CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad dataset, unknown node, contract violation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during malha operations
#[derive(Error, Debug)]
pub enum MalhaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no such origin node: {node}")]
    OriginNotFound { node: String },

    #[error("negative edge weight {weight} on {from} -- {to}: Dijkstra requires non-negative weights")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("missing column '{column}' in {path:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid edge weight '{value}' in {path:?}")]
    InvalidWeight { path: PathBuf, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MalhaError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MalhaError::UnknownFormat(_) | MalhaError::UsageError(_) => ExitCode::Usage,

            // Data errors
            MalhaError::OriginNotFound { .. }
            | MalhaError::NegativeWeight { .. }
            | MalhaError::MissingColumn { .. }
            | MalhaError::InvalidWeight { .. }
            | MalhaError::Csv(_) => ExitCode::Data,

            // Generic failures
            MalhaError::Io(_) | MalhaError::Json(_) | MalhaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MalhaError::UnknownFormat(_) => "unknown_format",
            MalhaError::UsageError(_) => "usage_error",
            MalhaError::OriginNotFound { .. } => "origin_not_found",
            MalhaError::NegativeWeight { .. } => "negative_weight",
            MalhaError::MissingColumn { .. } => "missing_column",
            MalhaError::InvalidWeight { .. } => "invalid_weight",
            MalhaError::Csv(_) => "csv_error",
            MalhaError::Io(_) => "io_error",
            MalhaError::Json(_) => "json_error",
            MalhaError::Other(_) => "other",
        }
    }
}

/// Result type alias for malha operations
pub type Result<T> = std::result::Result<T, MalhaError>;
