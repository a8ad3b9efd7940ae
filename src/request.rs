use std::sync::LazyLock;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::error::VerifyError;

/// Default timeout for siteverify requests
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Shared HTTP client with connection pooling for all siteverify requests.
/// This client is initialized once and reused across every `Client` instance.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .user_agent(format!("recaptcha-v3/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// A simple HTTP request wrapper for the siteverify endpoint.
pub struct Request;

impl Request {
    /// Makes a POST request to the given URL with a form-url-encoded body.
    ///
    /// # Arguments
    /// * `url` - The URL to send the request to
    /// * `form` - The request body to serialize as form fields
    ///
    /// # Returns
    /// The raw response from the server
    ///
    /// # Errors
    /// Returns an error if the request fails or the timeout elapses
    pub async fn post_form<T>(url: &str, form: &T) -> Result<reqwest::Response, VerifyError>
    where
        T: Serialize + Send + Sync,
    {
        debug!("Sending POST request to: {url}");

        HTTP_CLIENT.post(url).form(form).send().await.map_err(|e| {
            debug!("Request failed: {e}");
            e.into()
        })
    }
}
