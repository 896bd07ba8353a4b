use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::utils::dates::parse_date_arg;

#[derive(Parser, Debug)]
#[command(
    name = "pyeongsam",
    version,
    author,
    about = "Bible reading plan tracker: 3 chapters on weekdays, 5 on Sundays"
)]
pub struct Cli {
    /// Date to open the TUI on (YYYY-MM-DD, today, yesterday, tomorrow)
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the reading for a date along with overall progress
    Today {
        /// Date to compute for (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show only the progress line and current position
    Progress {
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// List the books of the plan in reading order
    Books {
        /// Show a single book
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the configuration file
    Config {
        /// Print the config file path only
        #[arg(long)]
        path: bool,
        /// Write a default config file if none exists
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["pyeongsam"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.date.is_none());
    }

    #[test]
    fn today_takes_iso_date_and_json() {
        let cli = Cli::try_parse_from(["pyeongsam", "today", "--date", "2023-01-02", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Today { date, json }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 2));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn bad_date_is_a_usage_error() {
        assert!(Cli::try_parse_from(["pyeongsam", "progress", "--date", "soon"]).is_err());
    }

    #[test]
    fn config_flags_conflict() {
        assert!(Cli::try_parse_from(["pyeongsam", "config", "--path", "--init"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
