//! Calendar date rendering.

use chrono::{DateTime, Utc};

/// Epoch seconds → UTC timestamp; out-of-range values clamp to the epoch.
pub fn datetime_from_secs(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

/// Long-form date, e.g. `May 13, 2022`.
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        // 2022-05-13T12:00:00Z
        let at = datetime_from_secs(1_652_443_200);
        assert_eq!(long_date(&at), "May 13, 2022");
    }

    #[test]
    fn test_single_digit_day_has_no_padding() {
        // 2021-01-05T00:00:00Z
        let at = datetime_from_secs(1_609_804_800);
        assert_eq!(long_date(&at), "January 5, 2021");
    }

    #[test]
    fn test_out_of_range_clamps_to_epoch() {
        assert_eq!(datetime_from_secs(i64::MAX).timestamp(), 0);
    }
}
