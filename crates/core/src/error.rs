//! Error types for the gateway
//!
//! Every failure in the request pipeline is represented by [`Error`]. The
//! handler catches errors exactly once, at the outermost layer, and turns
//! them into a failure response; nothing here is fatal to the process.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gateway
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The `params` payload is not a JSON object
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// A library script could not be read from disk
    #[error("cannot load script '{}': {reason}", path.display())]
    ScriptLoad {
        /// Resolved path of the library file
        path: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },

    /// The evaluator rejected or failed to run a script.
    ///
    /// Displayed verbatim so callers see the evaluator's own message.
    #[error("{0}")]
    Evaluation(String),

    /// A result could not be encoded for the wire
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The host database refused to produce a graph handle
    #[error("graph unavailable: {0}")]
    GraphUnavailable(String),

    /// Opening or committing a transaction failed
    #[error("transaction error: {0}")]
    Transaction(String),

    /// A new evaluator could not be constructed
    #[error("evaluator construction failed: {0}")]
    Evaluator(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Coarse taxonomy used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed request input
    Request,
    /// Missing or unreadable library script
    Library,
    /// Script syntax or runtime error
    Evaluation,
    /// Unencodable result
    Serialization,
    /// Host database, transaction, evaluator or config failures
    System,
}

impl ErrorCategory {
    /// Short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Request => "request",
            ErrorCategory::Library => "library",
            ErrorCategory::Evaluation => "evaluation",
            ErrorCategory::Serialization => "serialization",
            ErrorCategory::System => "system",
        }
    }
}

impl Error {
    /// Create an evaluation error from any displayable message
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Error::Evaluation(msg.into())
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Error::Serialization(msg.into())
    }

    /// Create a transaction error
    pub fn transaction(msg: impl Into<String>) -> Self {
        Error::Transaction(msg.into())
    }

    /// Which bucket of the error taxonomy this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidParams(_) => ErrorCategory::Request,
            Error::ScriptLoad { .. } => ErrorCategory::Library,
            Error::Evaluation(_) => ErrorCategory::Evaluation,
            Error::Serialization(_) => ErrorCategory::Serialization,
            Error::GraphUnavailable(_)
            | Error::Transaction(_)
            | Error::Evaluator(_)
            | Error::Config(_) => ErrorCategory::System,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidParams(e.to_string())
    }
}
