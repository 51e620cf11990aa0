//! Runway CLI - personal finance forecasting
//!
//! Usage:
//!   runway forecast snapshot.json --horizon 12   Project balance and risk
//!   runway purchase snapshot.json --amount 500   Analyze a purchase
//!   runway suggestions                           Savings suggestions
//!   runway budget categories.json                Budget vs actual

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use runway_core::budget::BudgetCategory;
use runway_shared::AppConfig;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("runway=info")
    };

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;
    debug!(?config, "configuration loaded");

    let report = match cli.command {
        Commands::Forecast {
            snapshot,
            horizon,
            start,
        } => {
            let snapshot = commands::read_json(&snapshot)?;
            commands::forecast(&config, &snapshot, horizon, start)?
        }
        Commands::Purchase {
            snapshot,
            amount,
            description,
        } => {
            let snapshot = commands::read_json(&snapshot)?;
            commands::purchase(&snapshot, amount, description)?
        }
        Commands::Suggestions { ranked } => {
            let catalog = commands::load_catalog(&config)?;
            commands::suggestions(&catalog, ranked)
        }
        Commands::Budget { categories } => {
            let categories: Vec<BudgetCategory> = commands::read_json(&categories)?;
            commands::budget(&categories)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
