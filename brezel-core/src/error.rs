//! Error types for the Brezel API client.
//!
//! All error categories are unified into a single `BrezelError` enum. The
//! dispatcher is the only place that constructs the `Api` variant; every
//! higher-level operation propagates it unchanged.

use thiserror::Error;

/// Convenience type alias for Results using BrezelError.
pub type BrezelResult<T> = Result<T, BrezelError>;

/// Unified error type for the Brezel client.
#[derive(Error, Debug)]
pub enum BrezelError {
    /// The API responded with a status in the 400-599 range.
    ///
    /// Carries the decoded response body and headers so callers can branch
    /// on validation errors, auth failures, and server faults.
    #[error("HTTP {status} error for {url}: {body}")]
    Api {
        /// HTTP status code (400-599).
        status: u16,
        /// The URL that was requested.
        url: String,
        /// Decoded response body (JSON if the server said so, text otherwise).
        body: ErrorBody,
        /// Response headers as plain pairs.
        headers: Vec<(String, String)>,
    },

    /// HTTP transport failure (connection, DNS, protocol).
    #[error("http error: {0}")]
    Http(String),

    /// The request timed out at the transport level.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The assembled request URL is not a valid absolute URL.
    ///
    /// A bad base URI or path is a programming error, not a runtime
    /// condition to recover from.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BrezelError {
    fn from(e: serde_json::Error) -> Self {
        BrezelError::Serialization(e.to_string())
    }
}

impl BrezelError {
    /// The HTTP status code, if this is an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            BrezelError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Decoded body of an error response.
///
/// JSON bodies are parsed; anything else is kept as text. When the body
/// cannot be decoded at all, a `Text` placeholder is substituted so that
/// constructing the error never itself fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Parsed JSON body.
    Json(serde_json::Value),
    /// Raw text body, or the "Failed to parse response" placeholder.
    Text(String),
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{value}"),
            ErrorBody::Text(text) => write!(f, "{text}"),
        }
    }
}
