//! Display helpers for prices, percentages and dates.
//!
//! `decimal` renders parsed `Decimal` values; `num` holds the string-level
//! grouping both build on; `date` renders calendar dates.

pub mod date;
pub mod decimal;
pub mod num;

pub use date::long_date;
pub use decimal::{abbr_number, percent, usd, usd_grouped};
