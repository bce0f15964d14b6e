//! Conversions from wire types to domain types for coins.

use super::wire::{AllTimeHighResponse, CoinSummaryResponse, FullCoinResponse};
use super::{AllTimeHigh, Coin, FullCoin};
use crate::shared::fmt::date::datetime_from_secs;
use crate::shared::{parse_decimal_or_zero, parse_optional_decimal};

impl From<CoinSummaryResponse> for Coin {
    fn from(c: CoinSummaryResponse) -> Self {
        Self {
            price: parse_optional_decimal(c.price.as_deref()),
            market_cap: parse_optional_decimal(c.market_cap.as_deref()),
            change: parse_optional_decimal(c.change.as_deref()),
            btc_price: parse_optional_decimal(c.btc_price.as_deref()),
            sparkline: c.sparkline.map(|points| {
                points
                    .iter()
                    .map(|p| p.as_deref().map(parse_decimal_or_zero))
                    .collect()
            }),
            listed_at: datetime_from_secs(c.listed_at),
            id: c.uuid,
            symbol: c.symbol,
            name: c.name,
            color: c.color,
            icon_url: c.icon_url,
            rank: c.rank,
            tier: c.tier,
            low_volume: c.low_volume,
            coinranking_url: c.coinranking_url,
        }
    }
}

impl From<AllTimeHighResponse> for AllTimeHigh {
    fn from(ath: AllTimeHighResponse) -> Self {
        Self {
            price: parse_decimal_or_zero(&ath.price),
            at: datetime_from_secs(ath.timestamp),
        }
    }
}

impl From<FullCoinResponse> for FullCoin {
    fn from(c: FullCoinResponse) -> Self {
        Self {
            coin: c.summary.into(),
            all_time_high: c.all_time_high.into(),
        }
    }
}
