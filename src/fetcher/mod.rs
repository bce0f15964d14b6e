//! Fetchers — observable state for the coin list and the coin detail view.
//!
//! A fetcher owns its state in a `tokio::sync::watch` channel and issues requests
//! through [`CoinApi`]. Every fetch slot (list search, coin detail, history) is
//! guarded by a [`RequestSlot`](crate::shared::RequestSlot): only the response of
//! the latest request for a slot is applied.
//!
//! State can be read three ways: `snapshot()` for polling, `subscribe()` for a
//! `watch::Receiver`, and `updates()` for a `Stream` of snapshots.

pub mod detail;
pub mod list;

pub use detail::{CoinDetailFetcher, CoinDetailState};
pub use list::{CoinListFetcher, CoinListState};

use crate::domain::coin::{Coin, FullCoin};
use crate::domain::history::PriceHistory;
use crate::error::{ErrorKind, SdkError};
use crate::shared::{CoinId, TimePeriod};

use async_trait::async_trait;

/// The three requests the fetchers issue.
///
/// Implemented by [`CoinerClient`](crate::client::CoinerClient); tests and
/// alternative transports provide their own.
#[async_trait]
pub trait CoinApi: Send + Sync {
    async fn search_coins(&self, query: &str) -> Result<Vec<Coin>, SdkError>;

    async fn get_coin(&self, coin_id: &CoinId) -> Result<FullCoin, SdkError>;

    async fn get_history(
        &self,
        coin_id: &CoinId,
        period: TimePeriod,
    ) -> Result<PriceHistory, SdkError>;
}

#[cfg(feature = "http")]
#[async_trait]
impl CoinApi for crate::client::CoinerClient {
    async fn search_coins(&self, query: &str) -> Result<Vec<Coin>, SdkError> {
        self.coins().search(query).await
    }

    async fn get_coin(&self, coin_id: &CoinId) -> Result<FullCoin, SdkError> {
        self.coins().get(coin_id).await
    }

    async fn get_history(
        &self,
        coin_id: &CoinId,
        period: TimePeriod,
    ) -> Result<PriceHistory, SdkError> {
        self.history().get(coin_id, period).await
    }
}

/// What happened to one fetch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied to the state.
    Applied,
    /// A newer request for the same slot was issued first; the response was dropped.
    Superseded,
    /// The request failed; the slot is now `Failed` and keeps its previous value.
    Failed(ErrorKind),
    /// Nothing was requested (e.g. a period change with no coin open).
    Skipped,
}
