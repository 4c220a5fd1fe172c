//! Reply status and error wire shape
//!
//! All errors encode to JSON as:
//! ```json
//! {
//!   "code": "EmptyResultError",
//!   "message": "No data found for the specified parameters."
//! }
//! ```
//!
//! ## Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | SchemaError | Malformed or empty source schema |
//! | ImportError | Storage mutation failed during import |
//! | ValidationError | Missing or malformed request fields |
//! | EmptyResultError | Query matched zero rows |
//! | NotFoundError | Saved chart key absent |
//! | StorageError | Underlying engine failure |
//! | ConfigError | Invalid configuration |
//! | ChartOpenError | Saved chart could not be replayed |

use serde::{Deserialize, Serialize};

/// Outcome classification of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Request succeeded
    Ok,
    /// Request succeeded and created a resource
    Created,
    /// Caller sent something it can fix
    ClientError,
    /// Requested resource does not exist
    NotFound,
    /// Failure on our side; details are logged, not returned
    ServerFault,
}

impl Status {
    /// Equivalent HTTP status code, for callers that speak HTTP.
    pub fn http_code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::ClientError => 400,
            Status::NotFound => 404,
            Status::ServerFault => 500,
        }
    }

    /// Check if the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Ok | Status::Created)
    }
}

/// Error body returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    /// The canonical error code (e.g., "ValidationError")
    pub code: String,
    /// Human-readable, user-safe message
    pub message: String,
}

impl ErrorReply {
    /// Create a new error reply
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
