pub mod calculator;
pub mod resolver;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Reading, ReadingPosition, TOTAL_CHAPTERS};

pub use calculator::{chapters_for_day, chapters_read, is_sunday};
pub use resolver::{resolve_position, todays_reading};

/// Everything the screens show for one selected date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub is_sunday: bool,
    pub chapters_read: u32,
    pub position: ReadingPosition,
    pub readings: Vec<Reading>,
    /// Fraction of the canon read. Goes past 1.0 once the plan is finished.
    pub progress: f64,
}

impl DailySummary {
    pub fn for_date(date: NaiveDate) -> Self {
        let is_sunday = is_sunday(date);
        let chapters_read = chapters_read(date);
        let position = resolve_position(i64::from(chapters_read));
        let readings = todays_reading(position, is_sunday);
        let progress = (f64::from(chapters_read) / f64::from(TOTAL_CHAPTERS)).max(0.0);

        log::debug!("{}: position {}, {} readings", date, position, readings.len());

        DailySummary {
            date,
            is_sunday,
            chapters_read,
            position,
            readings,
            progress,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.position.is_complete()
    }

    /// True when the last book ran out before the day's quota.
    pub fn finishes_plan(&self) -> bool {
        !self.is_complete() && (self.readings.len() as u32) < chapters_for_day(self.date)
    }

    /// Progress clamped for drawing a bar.
    pub fn bar_ratio(&self) -> f64 {
        self.progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_new_year() {
        let summary = DailySummary::for_date(date(2023, 1, 1));
        assert!(summary.is_sunday);
        assert_eq!(summary.chapters_read, 0);
        assert_eq!(summary.position, ReadingPosition::start());
        assert_eq!(summary.readings.len(), 5);
        assert!(summary.readings.iter().all(|r| r.book == "Genesis"));
        assert_eq!(summary.readings.last().map(|r| r.chapter), Some(5));
        assert_eq!(summary.progress, 0.0);
    }

    #[test]
    fn monday_after_sunday_new_year() {
        let summary = DailySummary::for_date(date(2023, 1, 2));
        assert!(!summary.is_sunday);
        assert_eq!(summary.chapters_read, 5);
        assert_eq!(summary.position.to_string(), "Genesis 6");
        let chapters: Vec<u32> = summary.readings.iter().map(|r| r.chapter).collect();
        assert_eq!(chapters, [6, 7, 8]);
        assert!(!summary.finishes_plan());
    }

    #[test]
    fn year_end_is_complete() {
        let summary = DailySummary::for_date(date(2023, 12, 31));
        assert!(summary.is_complete());
        assert!(summary.readings.is_empty());
        assert!(summary.progress > 1.0);
        assert_eq!(summary.bar_ratio(), 1.0);
    }

    #[test]
    fn finishing_day_reads_a_partial_list() {
        let last = DailySummary::for_date(date(2023, 12, 28));
        assert_eq!(last.chapters_read, 1187);
        let labels: Vec<String> = last.readings.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["Revelation 21", "Revelation 22"]);
        assert!(last.finishes_plan());

        assert!(DailySummary::for_date(date(2023, 12, 29)).is_complete());
    }

    #[test]
    fn serializes_for_json_output() {
        let json = serde_json::to_value(DailySummary::for_date(date(2023, 1, 2))).unwrap();
        assert_eq!(json["date"], "2023-01-02");
        assert_eq!(json["chapters_read"], 5);
        assert_eq!(json["position"]["book"], "Genesis");
        assert_eq!(json["readings"][0]["chapter"], 6);
    }
}
