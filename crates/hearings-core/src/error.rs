//! Error types for the hearings record filter.

use thiserror::Error;

/// Result type alias using the hearings Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hearings operations.
///
/// The filter engine itself never fails; these errors come from the
/// collaborators around it (record loading, remote response mapping,
/// criteria parsing).
#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Hearing not found by record identifier
    #[error("Hearing not found: {0}")]
    HearingNotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Date bound is not an ISO-8601 calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Status label outside the closed status set
    #[error("Unknown hearing status: {0}")]
    UnknownStatus(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
