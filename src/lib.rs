//! Client for the reCAPTCHA v3 siteverify API.
//!
//! reCAPTCHA v3 scores traffic without user interaction: the site's
//! front-end widget produces a response token, and this crate forwards that
//! token (plus the optional requester IP) to the `siteverify` endpoint and
//! parses the JSON verdict into a typed [`VerifyResponse`].
//!
//! A token rejected by the service is a normal verdict with
//! `success == false`; [`VerifyError`] is reserved for transport and
//! decoding failures. Gating the protected action on the verdict (score
//! threshold, expected action, expected hostname) is the caller's policy.
//!
//! # Components
//! - `client`: the verification client and its single `verify` operation
//! - `response`: the typed siteverify verdict
//! - `error`: error types for failed siteverify calls
//! - `request`: HTTP utilities for the siteverify endpoint (internal)
//!
//! # Example
//! ```no_run
//! use recaptcha_v3::Client;
//!
//! # async fn gate_login(token: &str, remote_ip: &str) -> Result<(), recaptcha_v3::VerifyError> {
//! let client = Client::new(std::env::var("RECAPTCHA_SECRET").unwrap());
//! let verdict = client.verify(token, remote_ip).await?;
//!
//! if verdict.success && verdict.score >= 0.5 {
//!     // allow the protected action
//! } else {
//!     tracing::warn!("token rejected: {}", verdict.error_message());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// The verification client
pub mod client;

/// Error types for siteverify calls
pub mod error;

/// Typed siteverify verdict
pub mod response;

/// HTTP request utilities for the siteverify endpoint.
/// This module provides a reusable HTTP client with connection pooling.
mod request;

pub use client::Client;
pub use error::{VerifyError, VerifyResult};
pub use response::VerifyResponse;
