//! Typed verdict returned by the siteverify API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Parsed response of the reCAPTCHA v3 siteverify API.
///
/// `success == false` means the token was rejected by the verification
/// service; inspect [`error_codes`](Self::error_codes) for the causes. The
/// service omits the score-related fields on rejected tokens, so they fall
/// back to their defaults here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerifyResponse {
    /// Whether the response token was valid
    pub success: bool,

    /// Likelihood that the request came from a human: a score close to 1.0
    /// designates a human, a score close to 0.0 designates a bot.
    /// Meaningful only when `success` is true; defaults to 0.0 otherwise.
    #[serde(default)]
    pub score: f64,

    /// Action label supplied by the site's front-end integration, echoed
    /// back for correlation
    #[serde(default)]
    pub action: String,

    /// Timestamp of the solved challenge (ISO 8601); absent on rejected
    /// tokens
    pub challenge_ts: Option<DateTime<Utc>>,

    /// Hostname of the site where the challenge was solved, for origin
    /// validation by the caller
    #[serde(default)]
    pub hostname: String,

    /// Error codes explaining why verification failed; empty when `success`
    /// is true
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

impl VerifyResponse {
    /// Joins all error codes into a single diagnostic message, e.g.
    /// `"missing-input-secret, invalid-input-response"`.
    ///
    /// Pure formatting helper for rejected tokens; it does not decide
    /// whether the verdict is a failure.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error_codes.join(", ")
    }
}
