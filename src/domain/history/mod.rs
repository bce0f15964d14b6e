//! Price history domain — history points, period change, sparkline model.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod sparkline;
pub mod wire;

use crate::domain::coin::ChangeDirection;
use crate::shared::{fmt, CoinId, TimePeriod};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use sparkline::{Bar, Sparkline, Tooltip};

/// A single point of a coin's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Relative price on a 0–1 scale. Not validated; unparsable text is zero.
    pub normalized_price: f64,
    /// Epoch seconds, as sent. Doubles as the entry's identity in the chart.
    pub timestamp: i64,
    pub price: Decimal,
}

impl HistoryEntry {
    pub fn at(&self) -> DateTime<Utc> {
        fmt::date::datetime_from_secs(self.timestamp)
    }

    pub fn price_text(&self) -> String {
        fmt::usd(&self.price)
    }

    pub fn date_text(&self) -> String {
        fmt::long_date(&self.at())
    }
}

/// History for one (coin, period) pair, oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub coin_id: CoinId,
    pub period: TimePeriod,
    pub entries: Vec<HistoryEntry>,
    /// Percent change over the period.
    pub change: Decimal,
}

impl PriceHistory {
    pub fn change_text(&self) -> String {
        fmt::percent(&self.change)
    }

    pub fn change_direction(&self) -> ChangeDirection {
        ChangeDirection::from(&self.change)
    }

    pub fn sparkline(&self) -> Sparkline {
        Sparkline::new(&self.entries)
    }
}
