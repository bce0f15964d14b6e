//! Coins sub-client — search and detail.

use crate::client::CoinerClient;
use crate::domain::coin::{Coin, FullCoin};
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinerClient,
}

impl<'a> Coins<'a> {
    /// Coins matching `query`; an empty query lists all coins.
    pub async fn search(&self, query: &str) -> Result<Vec<Coin>, SdkError> {
        let resp = self.client.http.search_coins(query).await?;
        Ok(resp.coins.into_iter().map(Coin::from).collect())
    }

    /// Full detail for one coin.
    pub async fn get(&self, coin_id: &CoinId) -> Result<FullCoin, SdkError> {
        let resp = self.client.http.get_coin(coin_id).await?;
        Ok(resp.coin.into())
    }
}
