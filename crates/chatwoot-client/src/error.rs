//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation needs an agent token but the client was built without one.
    ///
    /// Raised before any request is sent.
    #[error("agent token is empty: {operation} requires a Chatwoot agent token")]
    MissingAgentToken {
        /// Name of the operation that was refused.
        operation: &'static str,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be encoded.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be sent or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Check if the call was refused for lack of an agent token.
    pub fn is_missing_agent_token(&self) -> bool {
        matches!(self, Error::MissingAgentToken { .. })
    }

    /// Check if the server rejected the request.
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Error::RequestFailed { .. })
    }

    /// HTTP status of a rejected request.
    ///
    /// Only [`Error::RequestFailed`] carries a status. Transport failures
    /// never reached a response and return `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RequestFailed { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::RequestFailed { status: 401 | 403, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::RequestFailed { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
