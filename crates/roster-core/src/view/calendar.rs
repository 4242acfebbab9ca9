//! Calendar helpers shared by label derivation, placement and navigation.
//!
//! Weeks start on Sunday throughout.

use jiff::{
    civil::{Date, DateTime},
    ToSpan,
};

use crate::error::{Result, RosterError};

/// Three-letter month names, indexed by zero-based month.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const SECONDS_PER_DAY: i64 = 86_400;

/// Day of the week with Sunday as 0 and Saturday as 6.
pub fn weekday_index(date: Date) -> i64 {
    i64::from(date.weekday().to_sunday_zero_offset())
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: Date) -> Date {
    date.checked_sub(weekday_index(date).days()).unwrap_or(date)
}

/// Returns true if both dates fall in the same Sunday-started week.
pub fn same_week(a: Date, b: Date) -> bool {
    start_of_week(a) == start_of_week(b)
}

/// Returns true if both dates fall in the same calendar month.
pub fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Zero-based index of the Sunday-started week of the month containing
/// `date`. The partial week holding the 1st is week 0.
pub fn week_of_month(date: Date) -> i64 {
    let lead = weekday_index(date.first_of_month());
    (lead + i64::from(date.day()) - 1) / 7
}

/// Number of Sunday-started weeks that touch the month containing `date`.
pub fn weeks_in_month(date: Date) -> i64 {
    let lead = weekday_index(date.first_of_month());
    (lead + i64::from(date.days_in_month()) + 6) / 7
}

/// Whole days elapsed from `earlier` to `later`, truncated toward zero.
pub fn days_between(later: DateTime, earlier: DateTime) -> i64 {
    later.duration_since(earlier).as_secs() / SECONDS_PER_DAY
}

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Parses a wall-clock datetime such as `2024-01-01T14:00`, or a bare date
/// such as `2024-01-01` (taken as midnight).
///
/// # Errors
///
/// Returns [`RosterError::InvalidInput`] if neither form parses.
pub fn parse_datetime(input: &str) -> Result<DateTime> {
    let trimmed = input.trim();
    if let Ok(datetime) = trimmed.parse::<DateTime>() {
        return Ok(datetime);
    }
    trimmed
        .parse::<Date>()
        .map(|date| date.to_datetime(jiff::civil::Time::midnight()))
        .map_err(|e| {
            RosterError::invalid_input("datetime")
                .with_reason(format!("'{input}' is not a date or datetime: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_weekday_index_starts_on_sunday() {
        // 2023-12-31 was a Sunday, 2024-01-06 a Saturday
        assert_eq!(weekday_index(date(2023, 12, 31)), 0);
        assert_eq!(weekday_index(date(2024, 1, 1)), 1);
        assert_eq!(weekday_index(date(2024, 1, 6)), 6);
    }

    #[test]
    fn test_start_of_week() {
        assert_eq!(start_of_week(date(2024, 1, 3)), date(2023, 12, 31));
        assert_eq!(start_of_week(date(2024, 1, 7)), date(2024, 1, 7));
        assert!(same_week(date(2024, 1, 1), date(2024, 1, 6)));
        assert!(!same_week(date(2024, 1, 6), date(2024, 1, 7)));
    }

    #[test]
    fn test_week_of_month() {
        // January 2024 starts on a Monday: weeks are 1-6, 7-13, 14-20, 21-27, 28-31
        assert_eq!(week_of_month(date(2024, 1, 1)), 0);
        assert_eq!(week_of_month(date(2024, 1, 6)), 0);
        assert_eq!(week_of_month(date(2024, 1, 7)), 1);
        assert_eq!(week_of_month(date(2024, 1, 31)), 4);
        assert_eq!(weeks_in_month(date(2024, 1, 15)), 5);
        // September 2024 starts on a Sunday and has 30 days
        assert_eq!(weeks_in_month(date(2024, 9, 1)), 5);
        // March 2024 starts on a Friday and has 31 days
        assert_eq!(weeks_in_month(date(2024, 3, 1)), 6);
    }

    #[test]
    fn test_days_between_truncates() {
        let from = date(2024, 1, 1).at(0, 0, 0, 0);
        assert_eq!(days_between(date(2024, 1, 1).at(23, 59, 59, 0), from), 0);
        assert_eq!(days_between(date(2024, 1, 7).at(23, 59, 59, 0), from), 6);
        assert_eq!(days_between(date(2024, 1, 8).at(0, 0, 0, 0), from), 7);
    }

    #[test]
    fn test_ordinal() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            rendered,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "31st"]
        );
    }

    #[test]
    fn test_parse_datetime_accepts_bare_dates() {
        assert_eq!(
            parse_datetime("2024-01-01T14:00").unwrap(),
            date(2024, 1, 1).at(14, 0, 0, 0)
        );
        assert_eq!(
            parse_datetime(" 2024-02-29 ").unwrap(),
            date(2024, 2, 29).at(0, 0, 0, 0)
        );
        assert!(parse_datetime("yesterday").is_err());
    }
}
