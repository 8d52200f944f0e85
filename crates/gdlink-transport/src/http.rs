//! HTTP transport implementation using `reqwest`.

use reqwest::header::CONTENT_TYPE;

use crate::{FORM_CONTENT_TYPE, Transport, TransportError};

/// A [`Transport`] over a pooled `reqwest` client.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with reqwest's default client settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-configured client (proxies, timeouts, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<String, TransportError> {
        tracing::debug!(url, bytes = body.len(), "POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_owned(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "non-success status");
            return Err(TransportError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| TransportError::Body {
            url: url.to_owned(),
            source: Box::new(e),
        })?;
        tracing::trace!(url, bytes = text.len(), "response received");
        Ok(text)
    }
}
