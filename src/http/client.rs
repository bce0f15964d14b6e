//! Low-level HTTP client — `CoinerHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Internal to the SDK; `CoinerClient` wraps this.

use crate::domain::coin::wire::{CoinResponse, CoinsResponse};
use crate::domain::history::wire::HistoryResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::{CoinId, TimePeriod};

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Coiner REST API.
#[derive(Clone)]
pub struct CoinerHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl CoinerHttp {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(crate::network::DEFAULT_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── URLs ─────────────────────────────────────────────────────────────

    pub(crate) fn coins_url(&self, search: &str) -> String {
        format!(
            "{}/api/coins?search={}",
            self.base_url,
            urlencoding::encode(search)
        )
    }

    pub(crate) fn coin_url(&self, coin_id: &CoinId) -> String {
        format!(
            "{}/api/coins/{}",
            self.base_url,
            urlencoding::encode(coin_id.as_str())
        )
    }

    pub(crate) fn history_url(&self, coin_id: &CoinId, period: TimePeriod) -> String {
        format!(
            "{}/api/coins/{}/history?timePeriod={}",
            self.base_url,
            urlencoding::encode(coin_id.as_str()),
            period.as_str()
        )
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn search_coins(&self, search: &str) -> Result<CoinsResponse, HttpError> {
        self.get(&self.coins_url(search)).await
    }

    pub async fn get_coin(&self, coin_id: &CoinId) -> Result<CoinResponse, HttpError> {
        self.get(&self.coin_url(coin_id)).await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn get_coin_history(
        &self,
        coin_id: &CoinId,
        period: TimePeriod,
    ) -> Result<HistoryResponse, HttpError> {
        self.get(&self.history_url(coin_id, period)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let Some(config) = self.retry.config() else {
            return self.do_get(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if config.retries(&e) && attempt < config.max_retries => {
                    let delay = config.delay_for(attempt, &e);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.text().await?;
            return serde_json::from_str(&body).map_err(|e| HttpError::Decode(e.to_string()));
        }

        Err(status_error(resp).await)
    }
}

async fn status_error(resp: Response) -> HttpError {
    let status_code = resp.status().as_u16();
    let retry_after_ms = resp
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(|secs| secs * 1000);
    let body_text = resp.text().await.unwrap_or_default();

    match status_code {
        404 => HttpError::NotFound(body_text),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body_text),
        _ => HttpError::ServerError {
            status: status_code,
            body: body_text,
        },
    }
}
