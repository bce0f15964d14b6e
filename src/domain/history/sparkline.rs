//! Sparkline bar chart model for a price history.
//!
//! Pure presentation state: bar geometry derived from the history, plus a single
//! hovered-entry selection. The renderer owns one instance per chart and feeds it
//! pointer events.
//!
//! Bars are laid out in reverse order of the input. Each bar is
//! `CHART_HEIGHT * normalized_price` tall, with no clamping, so an out-of-range
//! normalized price yields an out-of-range bar and an unparsable one a flat bar.

use super::HistoryEntry;

/// Height of a bar whose normalized price is 1.
pub const CHART_HEIGHT: f64 = 200.0;
/// Bar width in points.
pub const BAR_WIDTH: f64 = 3.0;
/// Horizontal gap between bars.
pub const BAR_SPACING: f64 = 2.5;

/// Geometry of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Timestamp of the entry this bar draws; identifies the bar.
    pub timestamp: i64,
    /// Left edge, measured from the start of the strip.
    pub x: f64,
    pub height: f64,
    /// Whether this bar's entry is the hovered one (drawn fully opaque).
    pub highlighted: bool,
}

/// Tooltip content for the hovered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Literal price, e.g. `"$30512.25"`.
    pub price_text: String,
    /// Calendar date, e.g. `"May 13, 2022"`.
    pub date_text: String,
}

/// Rendered height for one entry.
pub fn bar_height(entry: &HistoryEntry) -> f64 {
    CHART_HEIGHT * entry.normalized_price
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sparkline {
    /// Entries in visual (left-to-right) order.
    entries: Vec<HistoryEntry>,
    /// Timestamp of the hovered entry.
    hovered: Option<i64>,
}

impl Sparkline {
    pub fn new(history: &[HistoryEntry]) -> Self {
        Self {
            entries: history.iter().rev().cloned().collect(),
            hovered: None,
        }
    }

    /// Swap in a new history. The hover survives only if its entry is still present.
    pub fn set_history(&mut self, history: &[HistoryEntry]) {
        self.entries = history.iter().rev().cloned().collect();
        if let Some(ts) = self.hovered {
            if !self.entries.iter().any(|e| e.timestamp == ts) {
                self.hovered = None;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in visual order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn bars(&self) -> Vec<Bar> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Bar {
                timestamp: entry.timestamp,
                x: i as f64 * (BAR_WIDTH + BAR_SPACING),
                height: bar_height(entry),
                highlighted: self.hovered == Some(entry.timestamp),
            })
            .collect()
    }

    /// Total width of the strip.
    pub fn content_width(&self) -> f64 {
        match self.entries.len() {
            0 => 0.0,
            n => n as f64 * BAR_WIDTH + (n - 1) as f64 * BAR_SPACING,
        }
    }

    /// Pointer entered the bar at visual `index`. Out-of-range indices are ignored.
    pub fn hover(&mut self, index: usize) {
        if let Some(entry) = self.entries.get(index) {
            self.hovered = Some(entry.timestamp);
        }
    }

    /// Pointer entered the bar drawing `timestamp`.
    pub fn hover_timestamp(&mut self, timestamp: i64) {
        if self.entries.iter().any(|e| e.timestamp == timestamp) {
            self.hovered = Some(timestamp);
        }
    }

    /// Pointer left the whole strip. Leaving a single bar does not clear the hover.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&HistoryEntry> {
        let ts = self.hovered?;
        self.entries.iter().find(|e| e.timestamp == ts)
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.hovered().map(|entry| Tooltip {
            price_text: entry.price_text(),
            date_text: entry.date_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::wire::HistoryEntryResponse;

    fn entry(normalized: &str, timestamp: i64, price: &str) -> HistoryEntry {
        HistoryEntryResponse {
            normalized_price: normalized.to_string(),
            timestamp,
            price: price.to_string(),
        }
        .into()
    }

    fn sample() -> Vec<HistoryEntry> {
        vec![
            entry("0.1", 1652313600, "100"),
            entry("0.5", 1652400000, "150"),
            entry("1", 1652443200, "200"),
        ]
    }

    #[test]
    fn test_half_normalized_price_is_half_height() {
        assert_eq!(bar_height(&entry("0.5", 0, "1")), 100.0);
    }

    #[test]
    fn test_unparsable_normalized_price_is_flat() {
        assert_eq!(bar_height(&entry("abc", 0, "1")), 0.0);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(bar_height(&entry("1.5", 0, "1")), 300.0);
        assert_eq!(bar_height(&entry("-0.5", 0, "1")), -100.0);
    }

    #[test]
    fn test_bars_are_reversed() {
        let chart = Sparkline::new(&sample());
        let bars = chart.bars();
        let timestamps: Vec<_> = bars.iter().map(|b| b.timestamp).collect();
        assert_eq!(timestamps, [1652443200, 1652400000, 1652313600]);
        assert_eq!(bars[0].height, 200.0);
        assert_eq!(bars[0].x, 0.0);
        assert_eq!(bars[1].x, 5.5);
        assert_eq!(chart.content_width(), 3.0 * 3.0 + 2.0 * 2.5);
    }

    #[test]
    fn test_empty_history_never_shows_tooltip() {
        let mut chart = Sparkline::new(&[]);
        assert!(chart.bars().is_empty());
        assert_eq!(chart.content_width(), 0.0);
        chart.hover(0);
        chart.hover_timestamp(1652400000);
        assert!(chart.hovered().is_none());
        assert!(chart.tooltip().is_none());
    }

    #[test]
    fn test_hover_sets_single_selection() {
        let mut chart = Sparkline::new(&sample());
        chart.hover(0);
        chart.hover(1);
        let highlighted: Vec<_> = chart
            .bars()
            .into_iter()
            .filter(|b| b.highlighted)
            .map(|b| b.timestamp)
            .collect();
        assert_eq!(highlighted, [1652400000]);
    }

    #[test]
    fn test_tooltip_shows_price_and_date() {
        let mut chart = Sparkline::new(&sample());
        chart.hover(0);
        assert_eq!(
            chart.tooltip(),
            Some(Tooltip {
                price_text: "$200".to_string(),
                date_text: "May 13, 2022".to_string(),
            })
        );
    }

    #[test]
    fn test_leave_strip_clears_hover() {
        let mut chart = Sparkline::new(&sample());
        chart.hover_timestamp(1652313600);
        assert!(chart.hovered().is_some());
        chart.leave();
        assert!(chart.tooltip().is_none());
        assert!(chart.bars().iter().all(|b| !b.highlighted));
    }

    #[test]
    fn test_set_history_drops_missing_hover() {
        let mut chart = Sparkline::new(&sample());
        chart.hover(2);
        chart.set_history(&sample()[1..]);
        assert!(chart.hovered().is_none());

        chart.hover_timestamp(1652400000);
        chart.set_history(&sample());
        assert_eq!(chart.hovered().map(|e| e.timestamp), Some(1652400000));
    }
}
