//! Transport abstraction layer for gdlink.
//!
//! The protocol crates only ever need one thing from the network: POST a
//! form body to a URL and get the text answer back. [`Transport`] is that
//! one operation, so tests (and unusual environments) can swap in their
//! own implementation.
//!
//! # Feature Flags
//!
//! - `http` (default) — [`HttpTransport`], backed by `reqwest`
//!
//! # Errors
//!
//! Non-2xx answers surface as [`TransportError::Status`]. Nothing here
//! retries, and nothing here interprets the body: `-1` is a perfectly
//! good transport-level success.

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "http")]
mod http;

pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::HttpTransport;

/// The MIME type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Sends form-encoded requests and returns the raw response text.
pub trait Transport: Send + Sync + 'static {
    /// POSTs `body` (already URL-encoded) to `url`.
    async fn post_form(&self, url: &str, body: String) -> Result<String, TransportError>;
}
