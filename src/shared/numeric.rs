//! Parsing for the text-encoded numbers the backend sends.
//!
//! Every numeric field on the wire is a JSON string. Parsing happens once, at the
//! wire → domain boundary, with a zero-on-failure policy: an unparsable value
//! degrades to zero instead of failing the whole response.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal string, falling back to scientific notation, then to zero.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    let trimmed = s.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_default()
}

/// Optional fields keep their absence; a present but unparsable value becomes zero.
pub fn parse_optional_decimal(s: Option<&str>) -> Option<Decimal> {
    s.map(parse_decimal_or_zero)
}

/// Parse a float for geometry. Non-finite values count as unparsable.
pub fn parse_f64_or_zero(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
