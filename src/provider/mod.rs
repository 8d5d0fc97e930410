//! Outbound provider access.

pub mod http;

pub use http::{api_key_header, FetchRequest, HttpAdapter};

use async_trait::async_trait;

use crate::error::BotError;

/// Source of upstream JSON payloads.
///
/// [`HttpAdapter`] is the production implementation; tests substitute canned
/// payloads.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Perform one GET and return the parsed body of a 2xx response.
    async fn fetch_json(&self, request: &FetchRequest) -> Result<serde_json::Value, BotError>;
}
