use std::sync::Arc;

use url::Url;

use crate::adapter::HttpTransport;
use crate::UpbitConnector;

/// Production endpoint of the Upbit public REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.upbit.com";

/// Builder for [`UpbitConnector`].
///
/// The base URL override exists for tests against a local mock server; the
/// client override lets callers bring a preconfigured `reqwest::Client`
/// (proxies, timeouts).
pub struct UpbitBuilder {
    base_url: Url,
    client: Option<reqwest::Client>,
}

impl Default for UpbitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpbitBuilder {
    /// Start from the production endpoint with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default base url"),
            client: None,
        }
    }

    /// Point the connector at a different REST endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Use a caller-provided HTTP client.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Panics
    /// Panics if building the default `reqwest::Client` fails, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn build(self) -> UpbitConnector {
        let http = self.client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .build()
                .expect("Failed to build reqwest client for UpbitConnector")
        });
        UpbitConnector::with_transport(Arc::new(HttpTransport::new(http, self.base_url)))
    }
}
