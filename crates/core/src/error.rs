//! Unified error types for benchplot.
//!
//! Every component returns [`Error`]. The request boundary turns an error
//! into a [`Status`] plus a message that is safe to show to the caller:
//!
//! | Variant | Status | Message surfaced |
//! |---------|--------|------------------|
//! | Validation | ClientError | verbatim |
//! | EmptyResult | ClientError | verbatim |
//! | NotFound | NotFound | the missing key |
//! | ChartOpen | ServerFault | fixed "could not open chart" text |
//! | Schema, Import, Storage, Config | ServerFault | generic |

use thiserror::Error;

use crate::reply::{ErrorReply, Status};

/// Message used for every error whose details must stay server-side.
pub const GENERIC_MESSAGE: &str = "An unexpected error occurred.";

/// Message used when a saved chart cannot be replayed.
pub const CHART_OPEN_MESSAGE: &str = "An error occurred trying to open chart file.";

/// All benchplot errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or empty source schema, or a table that does not match
    /// the configured controls
    #[error("schema error: {0}")]
    Schema(String),

    /// A storage mutation failed during import; the import was rolled back
    #[error("import failed: {0}")]
    Import(String),

    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Well-formed query that matched zero rows
    #[error("No data found for the specified parameters.")]
    EmptyResult,

    /// Saved-chart key absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Underlying engine failure (I/O, corruption, SQL error)
    #[error("storage error: {0}")]
    Storage(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Replaying a saved chart failed; no partial chart is produced
    #[error("could not open chart: {0}")]
    ChartOpen(Box<Error>),
}

/// Result type for benchplot operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error code used in replies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Schema(_) => "SchemaError",
            Error::Import(_) => "ImportError",
            Error::Validation(_) => "ValidationError",
            Error::EmptyResult => "EmptyResultError",
            Error::NotFound(_) => "NotFoundError",
            Error::Storage(_) => "StorageError",
            Error::Config(_) => "ConfigError",
            Error::ChartOpen(_) => "ChartOpenError",
        }
    }

    /// Status classification at the request boundary.
    pub fn status(&self) -> Status {
        match self {
            Error::Validation(_) | Error::EmptyResult => Status::ClientError,
            Error::NotFound(_) => Status::NotFound,
            _ => Status::ServerFault,
        }
    }

    /// Message that may cross the request boundary.
    ///
    /// Internal details (raw engine errors, paths) never appear here.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            Error::EmptyResult => self.to_string(),
            Error::NotFound(key) => format!("Chart not found: {}", key),
            Error::ChartOpen(_) => CHART_OPEN_MESSAGE.to_string(),
            _ => GENERIC_MESSAGE.to_string(),
        }
    }

    /// Convert to the reply body sent to callers.
    pub fn to_reply(&self) -> ErrorReply {
        ErrorReply::new(self.code(), self.user_message())
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        self.status() == Status::ClientError
    }

    /// Check if this is an empty-result error.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Error::EmptyResult)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Storage(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Validation(format!("malformed request: {}", e))
    }
}
