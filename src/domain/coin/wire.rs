//! Wire types for coin responses (REST).
//!
//! Field names and shapes mirror the backend JSON exactly. Numeric values stay
//! text here; parsing happens in `convert.rs`.

use crate::shared::serde_util::{optional_text_number, text_number};
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// One coin as listed by `/api/coins`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinSummaryResponse {
    pub uuid: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub icon_url: String,
    #[serde(
        default,
        with = "optional_text_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub market_cap: Option<String>,
    #[serde(
        default,
        with = "optional_text_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    pub listed_at: i64,
    pub tier: i32,
    #[serde(
        default,
        with = "optional_text_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub change: Option<String>,
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<Vec<Option<String>>>,
    pub low_volume: bool,
    pub coinranking_url: String,
    #[serde(
        default,
        with = "optional_text_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub btc_price: Option<String>,
}

/// All-time-high block of the detail response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllTimeHighResponse {
    #[serde(with = "text_number")]
    pub price: String,
    /// Epoch seconds.
    pub timestamp: i64,
}

/// One coin as returned by `/api/coins/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FullCoinResponse {
    #[serde(flatten)]
    pub summary: CoinSummaryResponse,
    pub all_time_high: AllTimeHighResponse,
}

/// Search envelope: `{ "coins": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinsResponse {
    pub coins: Vec<CoinSummaryResponse>,
}

/// Detail envelope: `{ "coin": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    pub coin: FullCoinResponse,
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const BITCOIN_SUMMARY: &str = r##"{
        "uuid": "Qwsogvtv82FCd",
        "symbol": "BTC",
        "name": "Bitcoin",
        "color": "#f7931A",
        "iconUrl": "https://cdn.coinranking.com/bOabBYkcX/bitcoin_btc.svg",
        "marketCap": "583234567890",
        "price": "30512.25",
        "listedAt": 1330214400,
        "tier": 1,
        "change": "-2.51",
        "rank": 1,
        "sparkline": ["30100.1", null, "30512.25"],
        "lowVolume": false,
        "coinrankingUrl": "https://coinranking.com/coin/Qwsogvtv82FCd+bitcoin-btc",
        "24hVolume": "31204567890",
        "btcPrice": "1"
    }"##;

    pub const BITCOIN_FULL: &str = r##"{
        "coin": {
            "uuid": "Qwsogvtv82FCd",
            "symbol": "BTC",
            "name": "Bitcoin",
            "iconUrl": "https://cdn.coinranking.com/bOabBYkcX/bitcoin_btc.svg",
            "price": "30512.25",
            "listedAt": 1330214400,
            "tier": 1,
            "rank": 1,
            "lowVolume": false,
            "coinrankingUrl": "https://coinranking.com/coin/Qwsogvtv82FCd+bitcoin-btc",
            "allTimeHigh": { "price": "68763.41", "timestamp": 1636502400 }
        }
    }"##;
}
