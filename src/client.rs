//! reCAPTCHA v3 verification client.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::VerifyResult;
use crate::request::Request;
use crate::response::VerifyResponse;

/// The fixed siteverify endpoint of the reCAPTCHA v3 API.
const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Form payload of a siteverify call.
///
/// The service expects exactly these three fields. `remoteip` is sent with
/// an empty value when the requester address is unknown, never omitted.
#[derive(Serialize)]
struct SiteverifyRequest<'a> {
    /// Shared secret between the site and the verification service
    secret: &'a str,
    /// The requester's IP address; may be empty
    remoteip: &'a str,
    /// The response token produced by the front-end widget
    response: &'a str,
}

/// Client for the reCAPTCHA v3 siteverify API.
///
/// Holds the site secret for its whole lifetime. A single instance (or
/// clones of it) can be shared freely across tasks: [`verify`](Self::verify)
/// takes `&self` and every call is an independent round trip over a shared
/// connection pool.
#[derive(Clone)]
pub struct Client {
    /// Shared secret between the site and the verification service
    secret: String,
    /// Endpoint the client posts to; the fixed production URL outside tests
    siteverify_url: String,
}

impl Client {
    /// Creates a new client with the given site secret.
    ///
    /// The secret is not validated here; an invalid secret surfaces as an
    /// `invalid-input-secret` error code on the first verdict.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            siteverify_url: SITEVERIFY_URL.to_owned(),
        }
    }

    /// Replaces the siteverify endpoint, for tests that run a local stub of
    /// the verification service.
    #[cfg(any(test, feature = "test-utils"))]
    #[must_use]
    pub fn with_siteverify_url(mut self, url: impl Into<String>) -> Self {
        self.siteverify_url = url.into();
        self
    }

    /// Verifies a response token with the reCAPTCHA service and returns the
    /// parsed verdict.
    ///
    /// `token` is the opaque value produced by the site's front-end widget;
    /// `remote_ip` is the end user's address, forwarded for risk scoring,
    /// and may be empty when unknown.
    ///
    /// A rejected token is a normal verdict (`success == false` with
    /// populated [`error_codes`](VerifyResponse::error_codes)), not an
    /// error. Exactly one POST request is made per call; there are no
    /// retries.
    ///
    /// # Errors
    /// Returns [`VerifyError::Network`](crate::VerifyError::Network) if the
    /// request cannot be completed or the response body cannot be read, and
    /// [`VerifyError::Decode`](crate::VerifyError::Decode) if the body is
    /// not a valid siteverify verdict.
    #[instrument(skip_all)]
    pub async fn verify(&self, token: &str, remote_ip: &str) -> VerifyResult<VerifyResponse> {
        let form = SiteverifyRequest {
            secret: &self.secret,
            remoteip: remote_ip,
            response: token,
        };

        let response = Request::post_form(&self.siteverify_url, &form).await?;
        let body = response.text().await?;

        let verdict: VerifyResponse = serde_json::from_str(&body)?;
        debug!(
            success = verdict.success,
            score = verdict.score,
            "siteverify verdict received"
        );

        Ok(verdict)
    }
}

// The secret must not leak through debug output.
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("siteverify_url", &self.siteverify_url)
            .finish_non_exhaustive()
    }
}
