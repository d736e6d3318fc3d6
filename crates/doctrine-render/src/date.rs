//! Long-form date rendering

use chrono::NaiveDate;

/// Render a date as "Month D, YYYY", e.g. "March 7, 2024"
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_not_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(long_date(date), "March 7, 2024");
    }

    #[test]
    fn two_digit_day() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(long_date(date), "October 19, 2026");
    }
}
