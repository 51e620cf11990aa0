//! CLI argument definitions using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Runway - see how long your money lasts
#[derive(Parser)]
#[command(name = "runway")]
#[command(about = "Personal finance forecasting and advice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the balance, classify risk and report goal progress
    Forecast {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Months to project (defaults to the configured horizon)
        #[arg(long)]
        horizon: Option<u32>,

        /// First projected month, YYYY-MM-DD, used to label each month
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Analyze a one-time purchase
    Purchase {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Purchase amount
        #[arg(short, long)]
        amount: Decimal,

        /// What is being bought
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show savings suggestions and their totals
    Suggestions {
        /// Suggestions ranked by saving instead of catalog order
        #[arg(long)]
        ranked: bool,
    },

    /// Compare planned and actual spending per category
    Budget {
        /// Categories JSON file (array of {category, actual, planned})
        categories: PathBuf,
    },
}
