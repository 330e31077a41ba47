//! Error types for TonicPow API operations.

use thiserror::Error;

use crate::response::{ApiError, StandardResponse};

/// Errors that can occur during TonicPow API operations.
#[derive(Debug, Error)]
pub enum TonicPowError {
    /// Configuration is missing or incomplete.
    #[error("{0}")]
    ConfigMissing(String),

    /// A helper was called with an argument the endpoint cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request payload could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A configured header name or value is not valid on the wire.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The API answered with an unexpected status code.
    ///
    /// The display text is the remote `message`; the decoded error body is
    /// available on `response.error`.
    #[error("{message}")]
    Api {
        message: String,
        response: Box<StandardResponse>,
    },

    /// The API answered with an unexpected status code and a body that is
    /// not the documented error shape.
    #[error("{source}")]
    ErrorResponse {
        #[source]
        source: serde_json::Error,
        response: Box<StandardResponse>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Transport error raised by a custom transport.
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl TonicPowError {
    /// The response envelope, when the error happened after a response was
    /// received.
    pub fn response(&self) -> Option<&StandardResponse> {
        match self {
            Self::Api { response, .. } | Self::ErrorResponse { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The decoded remote error body, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        self.response().and_then(|r| r.error.as_ref())
    }

    /// The HTTP status code, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status_code)
    }
}

/// Result type alias for TonicPow operations.
pub type Result<T> = core::result::Result<T, TonicPowError>;
