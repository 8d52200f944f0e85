//! Client configuration.

use gdlink_codec::decompress::DEFAULT_OFFLOAD_THRESHOLD;
use gdlink_protocol::Endpoint;
use serde::{Deserialize, Serialize};

/// The official database server.
pub const DEFAULT_BASE_URL: &str = "http://www.boomlings.com/database/";

/// Where requests go and how large payloads are handled.
///
/// Every field has a sensible default, so a config is usually built with
/// `ClientConfig::default()` and the builder methods for whatever needs
/// changing:
///
/// ```rust
/// use gdlink::ClientConfig;
///
/// let config = ClientConfig::default()
///     .base_url("http://localhost:8080/database")
///     .cors_prefix("https://relay.example/");
/// assert_eq!(
///     config.endpoint_url(gdlink::Endpoint::UserInfo),
///     "https://relay.example/http://localhost:8080/database/getGJUserInfo20.php",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the database API. A missing trailing `/` is tolerated.
    pub base_url: String,

    /// Prepended verbatim to every request URL, for relays that take the
    /// target URL as their path.
    pub cors_prefix: Option<String>,

    /// Compressed payloads at least this large (in bytes) are inflated on
    /// the blocking pool instead of the calling task.
    ///
    /// Default: 64 KiB.
    pub offload_threshold: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            cors_prefix: None,
            offload_threshold: DEFAULT_OFFLOAD_THRESHOLD,
        }
    }
}

impl ClientConfig {
    /// Sets the database root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Routes every request through a relay.
    pub fn cors_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cors_prefix = Some(prefix.into());
        self
    }

    /// Sets the size from which inflation moves off the calling task.
    pub fn offload_threshold(mut self, bytes: usize) -> Self {
        self.offload_threshold = bytes;
        self
    }

    /// The full URL for `endpoint`.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}/{}",
            self.cors_prefix.as_deref().unwrap_or_default(),
            self.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }
}
