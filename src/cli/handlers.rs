use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::config::AppConfig;
use crate::models::book::book_index;
use crate::models::BOOKS;
use crate::plan::DailySummary;
use crate::utils::format::{format_date, format_percent, pad_display, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serializing output")?;
    println!("{}", out);
    Ok(())
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(config: &AppConfig, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let summary = DailySummary::for_date(resolve_date(date));
    if json {
        return print_json(&summary);
    }

    println!();
    println_colored!(
        GOLD,
        "  Reading plan — {}",
        format_date(summary.date, &config.display.date_format)
    );
    println!();
    println_colored!(BOLD, "  Chapters read: {}", summary.chapters_read);
    println!();

    if summary.is_complete() {
        println_colored!(GREEN, "  Congratulations! You have finished this year's reading.");
    } else {
        let label = if summary.is_sunday {
            "  Today's reading (Sunday):"
        } else {
            "  Today's reading:"
        };
        println_colored!(AMBER, "{}", label);
        for reading in &summary.readings {
            println!("    {} {}", config.display.check_mark, reading);
        }
        if summary.finishes_plan() {
            println_colored!(GREEN, "  Plan finishes with this reading.");
        }
    }

    println!();
    print_progress_line(config, &summary);
    println!();
    Ok(())
}

// ─── Progress ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ProgressReport<'a> {
    date: NaiveDate,
    chapters_read: u32,
    position: &'a crate::models::ReadingPosition,
    progress: f64,
}

pub fn handle_progress(config: &AppConfig, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let summary = DailySummary::for_date(resolve_date(date));
    if json {
        return print_json(&ProgressReport {
            date: summary.date,
            chapters_read: summary.chapters_read,
            position: &summary.position,
            progress: summary.progress,
        });
    }

    println!();
    if summary.is_complete() {
        println_colored!(GREEN, "  Plan complete ({} chapters)", summary.chapters_read);
    } else {
        println_colored!(
            BOLD,
            "  {} chapters read  ·  next: {}",
            summary.chapters_read,
            summary.position
        );
    }
    print_progress_line(config, &summary);
    println!();
    Ok(())
}

fn print_progress_line(config: &AppConfig, summary: &DailySummary) {
    let bar = progress_bar(summary.bar_ratio(), config.display.bar_width);
    let color = if summary.is_complete() { GREEN } else { AMBER };
    println_colored!(color, "  {}", bar);
    println_colored!(DIM, "  Overall progress: {}", format_percent(summary.progress));
}

// ─── Books ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRow {
    pub name: &'static str,
    pub chapters: u32,
    /// Cumulative chapter number of the book's first chapter (1-based)
    pub starts_at: u32,
    pub ends_at: u32,
}

pub fn book_rows() -> Vec<BookRow> {
    let mut before = 0;
    BOOKS
        .iter()
        .map(|book| {
            let row = BookRow {
                name: book.name,
                chapters: book.chapters,
                starts_at: before + 1,
                ends_at: before + book.chapters,
            };
            before += book.chapters;
            row
        })
        .collect()
}

pub fn handle_books(name: Option<&str>, json: bool) -> Result<()> {
    let mut rows = book_rows();
    if let Some(name) = name {
        let idx = book_index(name).ok_or_else(|| anyhow!("Unknown book '{}'", name))?;
        rows = vec![rows.swap_remove(idx)];
    }

    if json {
        return print_json(&rows);
    }

    let name_width = rows
        .iter()
        .map(|r| unicode_width::UnicodeWidthStr::width(r.name))
        .max()
        .unwrap_or(0);

    println!();
    for row in &rows {
        println!(
            "  {}  {:>3} ch  {}",
            pad_display(row.name, name_width),
            row.chapters,
            format_args!("{}{:>4}–{:<4}\x1b[0m", DIM, row.starts_at, row.ends_at)
        );
    }
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, path_only: bool, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }
    if init {
        if path.exists() {
            println_colored!(AMBER, "  Config already exists at {}", path.display());
        } else {
            AppConfig::default().save_to(&path)?;
            println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    println_colored!(DIM, "# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TOTAL_CHAPTERS;

    #[test]
    fn book_rows_are_contiguous() {
        let rows = book_rows();
        assert_eq!(rows.len(), 66);
        assert_eq!(rows[0].starts_at, 1);
        assert_eq!(rows[0].ends_at, 50);
        assert_eq!(rows[1].starts_at, 51);
        for pair in rows.windows(2) {
            assert_eq!(pair[0].ends_at + 1, pair[1].starts_at);
        }
        assert_eq!(rows[65].ends_at, TOTAL_CHAPTERS);
    }

    #[test]
    fn unknown_book_is_an_error() {
        assert!(handle_books(Some("Tobit"), true).is_err());
    }
}
