use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const WEEKDAY_RATE: u32 = 3;
pub const SUNDAY_RATE: u32 = 5;

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Chapters assigned for a single day.
pub fn chapters_for_day(date: NaiveDate) -> u32 {
    if is_sunday(date) {
        SUNDAY_RATE
    } else {
        WEEKDAY_RATE
    }
}

/// January 1 of the date's year. The plan restarts every year.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// Chapters that should be finished before the selected day's own reading.
///
/// Sums the daily rate for every day from January 1 through `selected`
/// inclusive, then takes off a weekday's worth (3) for the selected day.
/// The 3 is subtracted even when January 1 fell on a Sunday.
pub fn chapters_read(selected: NaiveDate) -> u32 {
    let start = year_start(selected);
    if selected == start {
        return 0;
    }

    let total: u32 = start
        .iter_days()
        .take_while(|day| *day <= selected)
        .map(chapters_for_day)
        .sum();

    let read = total.saturating_sub(WEEKDAY_RATE);
    log::debug!("{}: {} chapters assigned since {}, {} read", selected, total, start, read);
    read
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_first_is_always_zero() {
        for year in 2020..=2030 {
            assert_eq!(chapters_read(date(year, 1, 1)), 0, "year {}", year);
        }
    }

    #[test]
    fn sunday_new_year_then_monday() {
        // 2023-01-01 was a Sunday.
        assert!(is_sunday(date(2023, 1, 1)));
        assert_eq!(chapters_read(date(2023, 1, 2)), 5);
        // Tue: 5 + 3 + 3 - 3
        assert_eq!(chapters_read(date(2023, 1, 3)), 8);
    }

    #[test]
    fn weekday_new_year() {
        // 2024-01-01 was a Monday, so the first Sunday is 2024-01-07.
        assert_eq!(chapters_read(date(2024, 1, 2)), 3);
        assert_eq!(chapters_read(date(2024, 1, 7)), 6 * 3 + 5 - 3);
        assert_eq!(chapters_read(date(2024, 1, 8)), 7 * 3 + 5 - 3);
    }

    #[test]
    fn only_counts_the_selected_year() {
        assert_eq!(chapters_read(date(2023, 12, 31)), 53 * 5 + 312 * 3 - 3);
        assert_eq!(chapters_read(date(2024, 1, 1)), 0);
    }

    #[test]
    fn leap_day_is_counted() {
        let before = chapters_read(date(2024, 2, 28));
        let after = chapters_read(date(2024, 3, 1));
        // 2024-02-29 was a Thursday, 2024-03-01 a Friday.
        assert_eq!(after - before, 6);
    }

    #[test]
    fn year_start_normalizes_any_day() {
        assert_eq!(year_start(date(2025, 7, 19)), date(2025, 1, 1));
        assert_eq!(year_start(date(2024, 12, 31)), date(2024, 1, 1));
    }

    #[test]
    fn daily_rate() {
        assert_eq!(chapters_for_day(date(2023, 1, 1)), SUNDAY_RATE);
        assert_eq!(chapters_for_day(date(2023, 1, 7)), WEEKDAY_RATE);
    }
}
