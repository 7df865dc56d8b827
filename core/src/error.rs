//! Error types for the placeholder API client.
//!
//! # Design
//! A status mismatch and a body that does not fit the expected shape are the
//! two failures an endpoint call can produce on a reachable server. Both are
//! terminal for the caller. Transport, path-template and configuration
//! problems get their own variants so a failing test names the real cause.

use thiserror::Error;

/// Errors returned by endpoint operations and `ValidatedResponse` assertions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the one asserted.
    #[error("expected HTTP {expected} but got {actual}: {body}")]
    UnexpectedStatus { expected: u16, actual: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The HTTP round-trip itself failed (connection refused, timeout, ...).
    #[error("transport failed: {0}")]
    TransportError(String),

    /// A path template and its parameters did not line up.
    #[error("invalid path template: {0}")]
    PathTemplate(String),

    /// A `RequestSpec` could not be built from its inputs.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The status the server actually returned, if this is a status mismatch.
    pub fn actual_status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
