//! Error types for siteverify calls.

use thiserror::Error;

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors that can occur while calling the siteverify endpoint.
///
/// A token rejected by the verification service is not an error: it comes
/// back as a normal [`VerifyResponse`](crate::VerifyResponse) with
/// `success == false` and populated error codes.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Network error when communicating with the siteverify endpoint,
    /// including failures while reading the response body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON matching the siteverify shape
    #[error("Invalid siteverify response: {0}")]
    Decode(#[from] serde_json::Error),
}
