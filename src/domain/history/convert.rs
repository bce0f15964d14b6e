//! Conversions from wire types to domain types for price history.

use super::wire::{HistoryEntryResponse, HistoryResponse};
use super::{HistoryEntry, PriceHistory};
use crate::shared::{parse_decimal_or_zero, parse_f64_or_zero, CoinId, TimePeriod};

impl From<HistoryEntryResponse> for HistoryEntry {
    fn from(e: HistoryEntryResponse) -> Self {
        Self {
            normalized_price: parse_f64_or_zero(&e.normalized_price),
            timestamp: e.timestamp,
            price: parse_decimal_or_zero(&e.price),
        }
    }
}

impl PriceHistory {
    /// Build from a response; the envelope itself does not echo its key.
    pub fn from_response(coin_id: CoinId, period: TimePeriod, resp: HistoryResponse) -> Self {
        Self {
            coin_id,
            period,
            entries: resp.history.into_iter().map(HistoryEntry::from).collect(),
            change: parse_decimal_or_zero(&resp.change),
        }
    }
}
