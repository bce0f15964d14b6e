//! Coin domain — list summaries, detail view, display helpers.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::fmt;
use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── ChangeDirection ─────────────────────────────────────────────────────────

/// Sign of a percentage change, used to pick green or red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl From<&Decimal> for ChangeDirection {
    /// Strictly positive is `Up`; zero counts as `Down`.
    fn from(change: &Decimal) -> Self {
        if change.is_sign_positive() && !change.is_zero() {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }
}

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A coin as shown in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub color: Option<String>,
    pub icon_url: String,
    pub price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    /// 24h change in percent.
    pub change: Option<Decimal>,
    pub rank: u32,
    pub sparkline: Option<Vec<Option<Decimal>>>,
    pub listed_at: DateTime<Utc>,
    pub tier: i32,
    pub low_volume: bool,
    pub coinranking_url: String,
    pub btc_price: Option<Decimal>,
}

impl Coin {
    /// `"$1234.5"`, or `None` when the backend sent no price.
    pub fn price_text(&self) -> Option<String> {
        self.price.as_ref().map(fmt::usd)
    }

    pub fn change_text(&self) -> Option<String> {
        self.change.as_ref().map(fmt::percent)
    }

    pub fn change_direction(&self) -> Option<ChangeDirection> {
        self.change.as_ref().map(ChangeDirection::from)
    }

    /// Grouped dollar amount, e.g. `"$583,234,567,890"`.
    pub fn market_cap_text(&self) -> Option<String> {
        self.market_cap.as_ref().map(fmt::usd_grouped)
    }

    /// Abbreviated dollar amount, e.g. `"$583.23B"`.
    pub fn market_cap_compact(&self) -> Option<String> {
        self.market_cap
            .as_ref()
            .map(|cap| format!("${}", fmt::abbr_number(cap, None, None)))
    }
}

// ─── FullCoin ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeHigh {
    pub price: Decimal,
    pub at: DateTime<Utc>,
}

impl AllTimeHigh {
    pub fn price_text(&self) -> String {
        fmt::usd(&self.price)
    }

    pub fn date_text(&self) -> String {
        fmt::long_date(&self.at)
    }
}

/// A coin with the extra fields of the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullCoin {
    pub coin: Coin,
    pub all_time_high: AllTimeHigh,
}

impl std::ops::Deref for FullCoin {
    type Target = Coin;

    fn deref(&self) -> &Coin {
        &self.coin
    }
}
