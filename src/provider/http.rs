//! HTTP adapter: one bounded GET per call, JSON body on 2xx.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bon::Builder;
use tracing::debug;

use super::JsonFetcher;
use crate::config::BotConfig;
use crate::error::BotError;
use crate::util::timeout::with_timeout;

/// Header name the quote provider reads its key from.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// A GET request against a provider.
///
/// Query values may carry secrets, so `Debug` prints parameter names only.
#[derive(Clone, Builder)]
pub struct FetchRequest {
    #[builder(into)]
    pub url: String,
    #[builder(default)]
    pub query: Vec<(String, String)>,
    #[builder(default)]
    pub headers: Vec<(String, String)>,
    /// Overrides the adapter's default timeout for this call.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query_keys: Vec<&str> = self.query.iter().map(|(k, _)| k.as_str()).collect();
        let header_names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("FetchRequest")
            .field("url", &self.url)
            .field("query", &query_keys)
            .field("headers", &header_names)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Build the quote provider's API key header.
pub fn api_key_header(api_key: &str) -> (String, String) {
    (API_KEY_HEADER.to_string(), api_key.to_string())
}

/// Join a base URL and an endpoint path without doubling slashes.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// reqwest-backed [`JsonFetcher`].
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAdapter {
    /// Build an adapter using the configured timeout.
    pub fn new(config: &BotConfig) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("meteobot/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            client,
            timeout: config.http_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send(&self, request: &FetchRequest) -> Result<serde_json::Value, BotError> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // reqwest errors embed the full URL, query string and key included.
        let response = builder.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        if !status.is_success() {
            debug!(url = %request.url, status = status.as_u16(), "upstream returned non-success status");
            return Err(BotError::upstream_status(status.as_u16(), request.url.as_str()));
        }

        let body = response.bytes().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_slice(&body).map_err(|e| {
            BotError::Normalization(format!("malformed JSON from {}: {e}", request.url))
        })
    }
}

#[async_trait]
impl JsonFetcher for HttpAdapter {
    async fn fetch_json(&self, request: &FetchRequest) -> Result<serde_json::Value, BotError> {
        let timeout = request.timeout.unwrap_or(self.timeout);
        debug!(url = %request.url, timeout_ms = timeout.as_millis() as u64, "fetching upstream JSON");
        with_timeout(timeout, self.send(request)).await
    }
}
