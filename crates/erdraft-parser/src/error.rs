//! Errors reported by [`TextGenerator`](crate::TextGenerator) implementations.

use thiserror::Error;

/// Failure of the upstream text-generation service.
///
/// These never escape [`extract`](crate::extract); they are logged and turn
/// into an empty model.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The service could not be reached or the request did not complete.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service responded with status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// No generator is available in this build or configuration.
    #[error("text generator unavailable: {0}")]
    Unavailable(String),
}
