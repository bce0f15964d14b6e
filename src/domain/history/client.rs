//! Price history sub-client.

use crate::client::CoinerClient;
use crate::domain::history::PriceHistory;
use crate::error::SdkError;
use crate::shared::{CoinId, TimePeriod};

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinerClient,
}

impl<'a> PriceHistoryClient<'a> {
    pub async fn get(&self, coin_id: &CoinId, period: TimePeriod) -> Result<PriceHistory, SdkError> {
        let resp = self.client.http.get_coin_history(coin_id, period).await?;
        Ok(PriceHistory::from_response(coin_id.clone(), period, resp))
    }
}
