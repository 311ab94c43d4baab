mod cli;
mod config;
mod daily;
mod db;
mod game;
mod models;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    if !AppConfig::config_path()?.exists() {
        // Leave an editable template behind on first run
        config.save().context("Writing default config")?;
    }

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        Some(Commands::Daily) => {
            handlers::handle_daily(&conn, &config)?;
        }
        Some(Commands::Play { difficulty, rounds }) => {
            handlers::handle_play(&conn, &config, difficulty.as_deref(), rounds)?;
        }
        Some(Commands::Stats { week }) => {
            handlers::handle_stats(&conn, week)?;
        }
        Some(Commands::Export) => {
            handlers::handle_export(&conn)?;
        }
        Some(Commands::List) => {
            handlers::handle_list(&conn)?;
        }

        // No subcommand → today's status
        None => {
            handlers::handle_status(&conn)?;
        }
    }

    Ok(())
}
