//! # Coiner SDK
//!
//! A Rust client for the Coiner price API: coin search, coin detail, price
//! history, and the state a coin list / coin detail UI renders from.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, domain models, wire types, display helpers, load state
//! 2. **HTTP API** — `CoinerHttp` with a configurable retry policy
//! 3. **High-Level Client** — `CoinerClient` with nested sub-clients
//! 4. **Fetchers** — `CoinListFetcher` / `CoinDetailFetcher`: observable state,
//!    last-request-wins slots
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coiner_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! let client = CoinerClient::builder().build()?;
//! let coins = client.coins().search("bit").await?;
//!
//! let detail = CoinDetailFetcher::new(Arc::new(client));
//! detail.open(&coins[0].id).await;
//! let chart = detail.snapshot().history.value().map(|h| h.sparkline());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, parsing, formatting and load-state primitives.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinerClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Fetchers ────────────────────────────────────────────────────────

/// Stateful fetchers for the list and detail views.
pub mod fetcher;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + load state
    pub use crate::shared::{CoinId, ErrorKind, LoadStatus, Loadable, TimePeriod};

    // Domain types
    pub use crate::domain::coin::{AllTimeHigh, ChangeDirection, Coin, FullCoin};
    pub use crate::domain::history::{Bar, HistoryEntry, PriceHistory, Sparkline, Tooltip};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinerClient, CoinerClientBuilder, CoinsClient, PriceHistorySubClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Fetchers
    pub use crate::fetcher::{
        CoinApi, CoinDetailFetcher, CoinDetailState, CoinListFetcher, CoinListState, FetchOutcome,
    };
}
