use chrono::{Datelike, Duration, Local, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateArgError {
    #[error("'{0}' is not a date (use YYYY-MM-DD, today, yesterday or tomorrow)")]
    Invalid(String),
}

/// Parse a date argument relative to `today`.
/// Accepts: "today", "yesterday", "tomorrow", "2025-03-09"
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateArgError> {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        "tomorrow" => Ok(today + Duration::days(1)),
        _ => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| DateArgError::Invalid(trimmed.to_string())),
    }
}

/// clap value parser: same as [`parse_date`] against the local calendar.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate, DateArgError> {
    parse_date(input, Local::now().date_naive())
}

/// The Sunday..Saturday week containing `date`.
pub fn week_of(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = i64::from(date.weekday().num_days_from_sunday());
    let sunday = date - Duration::days(offset);
    sunday.iter_days().take(7).collect()
}

/// Move `date` by `days`, staying put if that would leave chrono's range.
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn keywords_are_relative_to_today() {
        let today = date(2025, 3, 1);
        assert_eq!(parse_date("today", today), Ok(today));
        assert_eq!(parse_date("Yesterday", today), Ok(date(2025, 2, 28)));
        assert_eq!(parse_date(" tomorrow ", today), Ok(date(2025, 3, 2)));
    }

    #[test]
    fn iso_dates_parse() {
        assert_eq!(parse_date("2024-02-29", date(2025, 1, 1)), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn junk_is_rejected() {
        let today = date(2025, 1, 1);
        assert_eq!(
            parse_date("next week", today),
            Err(DateArgError::Invalid("next week".to_string()))
        );
        assert!(parse_date("2023-02-29", today).is_err());
        assert!(parse_date("", today).is_err());
    }

    #[test]
    fn week_runs_sunday_to_saturday() {
        let week = week_of(date(2023, 1, 4));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2023, 1, 1));
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[6], date(2023, 1, 7));

        // a Sunday starts its own week
        assert_eq!(week_of(date(2023, 1, 8))[0], date(2023, 1, 8));
    }

    #[test]
    fn shift_moves_by_days() {
        assert_eq!(shift(date(2023, 12, 31), 1), date(2024, 1, 1));
        assert_eq!(shift(date(2023, 1, 8), -7), date(2023, 1, 1));
        assert_eq!(shift(NaiveDate::MAX, 1), NaiveDate::MAX);
    }
}
