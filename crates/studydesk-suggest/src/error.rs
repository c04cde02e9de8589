//! Error types for provider calls.

use thiserror::Error;

/// Errors that can occur while asking the provider for text.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// No API key was configured at startup.
    #[error("missing API key: set {0}")]
    MissingApiKey(&'static str),

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The provider answered with a non-success status.
    #[error("provider error {status}: {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The reply could not be decoded.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The reply contained no candidate text.
    #[error("provider returned no text")]
    EmptyResponse,
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, SuggestError>;
