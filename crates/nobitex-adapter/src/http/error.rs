/*
[INPUT]:  Error sources (validation, HTTP, parsing, server rejections)
[OUTPUT]: Structured error types with preserved server messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Nobitex adapter
#[derive(Error, Debug)]
pub enum NobitexError {
    /// Caller-supplied arguments failed validation; raised before any
    /// network activity
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON, or a payload value did not map
    /// into its domain type
    #[error("response parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Envelope status "failed"; carries the server message verbatim
    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// Response shape violated the API contract
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl NobitexError {
    /// Create a validation error naming the offending field
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NobitexError::InvalidArgument(message.into())
    }

    /// Create a rejection carrying the server-supplied message
    pub fn rejected(message: impl Into<String>) -> Self {
        NobitexError::Rejected {
            message: message.into(),
        }
    }

    /// Check if the error is a business-level rejection whose message can
    /// be rendered to a user directly
    pub fn is_rejection(&self) -> bool {
        matches!(self, NobitexError::Rejected { .. })
    }

    /// Server message for a rejection, if this is one
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            NobitexError::Rejected { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for Nobitex operations
pub type Result<T> = std::result::Result<T, NobitexError>;
