//! Wire types for price history responses (REST).

use crate::shared::serde_util::text_number;
use serde::{Deserialize, Serialize};

/// A single history point from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponse {
    /// Price on a 0–1 scale relative to the period's range.
    #[serde(with = "text_number")]
    pub normalized_price: String,
    /// Epoch seconds.
    pub timestamp: i64,
    #[serde(with = "text_number")]
    pub price: String,
}

/// History envelope for one (coin, period) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntryResponse>,
    /// Percent change over the period.
    #[serde(with = "text_number")]
    pub change: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_history_response() {
        let json = r#"{
            "history": [
                { "normalizedPrice": "0.25", "timestamp": 1652400000, "price": "29000.5" },
                { "normalizedPrice": "1", "timestamp": 1652403600, "price": "31000" }
            ],
            "change": "3.45"
        }"#;
        let resp: HistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.history.len(), 2);
        assert_eq!(resp.history[0].normalized_price, "0.25");
        assert_eq!(resp.history[1].timestamp, 1652403600);
        assert_eq!(resp.change, "3.45");
    }

    #[test]
    fn test_decode_history_requires_change() {
        assert!(serde_json::from_str::<HistoryResponse>(r#"{"history":[]}"#).is_err());
    }
}
