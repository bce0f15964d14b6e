//! Decimal formatting for prices, percentages and market caps.
//!
//! Prices are shown literally: `usd` prints the parsed value with a dollar sign and
//! nothing else (no grouping, no rounding), matching what the coin list, detail
//! cards and chart tooltip display.

use rust_decimal::prelude::*;

const UNITS: [(u64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// `$` + the value with trailing fractional zeros removed.
pub fn usd(value: &Decimal) -> String {
    format!("${}", value.normalize())
}

/// `$` + the value with thousands separators, e.g. `$1,234,567.5`.
pub fn usd_grouped(value: &Decimal) -> String {
    let text = super::num::group_thousands(&value.normalize().to_string());
    match text.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", text),
    }
}

/// Percentage change, e.g. `-2.5%`.
pub fn percent(value: &Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Abbreviate a `Decimal` with K/M/B/T suffixes, rounding half away from zero.
pub fn abbr_number(amount: &Decimal, digits: Option<u32>, show_sign: Option<bool>) -> String {
    let digits = digits.unwrap_or(2);
    let sign = if show_sign.unwrap_or(true) && amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let abs_amount = amount.abs();

    let (scaled, suffix) = UNITS
        .iter()
        .map(|(unit, suffix)| (Decimal::from(*unit), *suffix))
        .find(|(unit, _)| abs_amount >= *unit)
        .map(|(unit, suffix)| (abs_amount / unit, suffix))
        .unwrap_or((abs_amount, ""));

    let rounded = scaled.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    format!(
        "{}{:.precision$}{}",
        sign,
        rounded,
        suffix,
        precision = digits as usize
    )
}
