//! Calendar arithmetic for tenure and vacation day counting
//!
//! Tenure is measured in anniversary months: a month only counts once the
//! hire day-of-month has recurred. Vacation days count every calendar day
//! except Sundays.

use chrono::{Datelike, NaiveDate};

use crate::error::{VacationError, VacationResult};

/// Date format used for input, storage and reports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(text: &str) -> VacationResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| VacationError::InvalidDateFormat(trimmed.to_string()))
}

/// Number of complete calendar months from `start` to `end`
///
/// Returns 0 when `end` precedes `start`.
pub fn full_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    let mut total = years * 12 + months;

    // The hire day-of-month has not recurred yet
    if end.day() < start.day() {
        total -= 1;
    }

    total.max(0) as u32
}

/// Inclusive day count over `[start, end]` minus the Sundays in that range
///
/// Returns 0 when `end` precedes `start`.
pub fn count_days_excluding_sundays(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let total_days = (end - start).num_days() + 1;
    let full_weeks = total_days / 7;
    let remainder = total_days % 7;

    // Offset from `start` to the first Sunday on or after it (0 when start is a Sunday)
    let to_first_sunday = 6 - i64::from(start.weekday().num_days_from_monday());
    let trailing_sunday = i64::from(remainder > to_first_sunday);

    (total_days - full_weeks - trailing_sunday) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Weekday};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn naive_count(start: NaiveDate, end: NaiveDate) -> u32 {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| d.weekday() != Weekday::Sun)
            .count() as u32
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-07-01 ").unwrap(), date("2024-07-01"));
        assert!(matches!(
            parse_date("07/01/2024"),
            Err(VacationError::InvalidDateFormat(s)) if s == "07/01/2024"
        ));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_full_months_anniversary() {
        let hire = date("2024-01-15");
        assert_eq!(full_months_between(hire, date("2024-07-15")), 6);
        assert_eq!(full_months_between(hire, date("2024-07-10")), 5);
        assert_eq!(full_months_between(hire, date("2024-01-15")), 0);
        assert_eq!(full_months_between(hire, date("2025-01-14")), 11);
        assert_eq!(full_months_between(hire, date("2025-01-15")), 12);
    }

    #[test]
    fn test_full_months_never_negative() {
        let hire = date("2024-01-15");
        assert_eq!(full_months_between(hire, date("2023-12-31")), 0);
        assert_eq!(full_months_between(hire, date("2024-01-20")), 0);
        assert_eq!(full_months_between(date("2024-01-31"), date("2024-02-29")), 0);
    }

    #[test]
    fn test_count_full_week() {
        // 2024-07-01 is a Monday, 2024-07-07 a Sunday
        assert_eq!(
            count_days_excluding_sundays(date("2024-07-01"), date("2024-07-07")),
            6
        );
    }

    #[test]
    fn test_count_edges() {
        assert_eq!(
            count_days_excluding_sundays(date("2024-07-07"), date("2024-07-07")),
            0
        );
        assert_eq!(
            count_days_excluding_sundays(date("2024-07-08"), date("2024-07-08")),
            1
        );
        assert_eq!(
            count_days_excluding_sundays(date("2024-07-08"), date("2024-07-01")),
            0
        );
    }

    #[test]
    fn test_count_matches_day_by_day_walk() {
        let base = date("2024-02-20");
        for offset in 0..7 {
            let start = base + Duration::days(offset);
            for len in 0..40 {
                let end = start + Duration::days(len);
                assert_eq!(
                    count_days_excluding_sundays(start, end),
                    naive_count(start, end),
                    "start={} end={}",
                    start,
                    end
                );
            }
        }
    }

    #[test]
    fn test_count_monotonic_in_end_date() {
        let start = date("2024-07-03");
        let mut previous = 0;
        for len in 0..60 {
            let count = count_days_excluding_sundays(start, start + Duration::days(len));
            assert!(count >= previous);
            previous = count;
        }
    }
}
