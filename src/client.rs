//! High-level client — `CoinerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::history::client::PriceHistoryClient;
use crate::error::SdkError;
use crate::http::{CoinerHttp, RetryPolicy};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::history::client::PriceHistoryClient as PriceHistorySubClient;

/// The primary entry point for the Coiner SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.history()`.
#[derive(Clone)]
pub struct CoinerClient {
    pub(crate) http: CoinerHttp,
}

impl CoinerClient {
    pub fn builder() -> CoinerClientBuilder {
        CoinerClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinerClientBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for CoinerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            retry: RetryPolicy::None,
        }
    }
}

impl CoinerClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<CoinerClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".into()));
        }
        Ok(CoinerClient {
            http: CoinerHttp::new(&self.base_url, self.timeout, self.retry)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CoinerClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "https://api.getcoiner.app");
    }

    #[test]
    fn test_builder_overrides() {
        let client = CoinerClient::builder()
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(2))
            .retry_policy(RetryPolicy::Idempotent)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        assert!(matches!(
            CoinerClient::builder().base_url(" ").build(),
            Err(SdkError::Validation(_))
        ));
    }
}
