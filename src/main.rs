mod cli;
mod config;
mod models;
mod plan;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use models::book::validate_table;
use models::{BOOKS, CANON_CHAPTERS};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // The table is static, but everything downstream assumes it is sound
    let total = validate_table(BOOKS, CANON_CHAPTERS).context("Validating book table")?;
    log::debug!("Book table ok: {} books, {} chapters", BOOKS.len(), total);

    let config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Today { date, json }) => {
            handlers::handle_today(&config, date, json)?;
        }
        Some(Commands::Progress { date, json }) => {
            handlers::handle_progress(&config, date, json)?;
        }
        Some(Commands::Books { name, json }) => {
            handlers::handle_books(name.as_deref(), json)?;
        }
        Some(Commands::Config { path, init }) => {
            handlers::handle_config(&config, path, init)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(config, cli.date)?;
        }
    }

    Ok(())
}
