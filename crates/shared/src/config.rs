//! Application configuration management.
//!
//! Every field has a default, so an empty configuration gives the stock
//! behavior: a 12-month horizon, risk windows of 3 and 6 months,
//! a healthy surplus of 500 and the built-in recommendation texts.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Projection configuration.
    pub projection: ProjectionConfig,
    /// Risk classification configuration.
    pub risk: RiskConfig,
    /// Savings suggestion configuration.
    pub suggestions: SuggestionConfig,
}

/// Projection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    /// Number of months projected when the caller does not ask for a horizon.
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: default_horizon_months(),
        }
    }
}

fn default_horizon_months() -> u32 {
    12
}

/// Risk classification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// Insolvency at or before this month is high risk.
    #[serde(default = "default_high_within_months")]
    pub high_within_months: u32,
    /// Insolvency at or before this month is medium risk.
    #[serde(default = "default_medium_within_months")]
    pub medium_within_months: u32,
    /// Monthly surplus below this amount is medium risk.
    #[serde(default = "default_min_healthy_surplus")]
    pub min_healthy_surplus: Decimal,
    /// Advice shown for each risk tier.
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_within_months: default_high_within_months(),
            medium_within_months: default_medium_within_months(),
            min_healthy_surplus: default_min_healthy_surplus(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

fn default_high_within_months() -> u32 {
    3
}

fn default_medium_within_months() -> u32 {
    6
}

fn default_min_healthy_surplus() -> Decimal {
    Decimal::from(500)
}

/// Ordered advice per risk tier.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Advice for the low risk tier.
    #[serde(default = "default_low_recommendations")]
    pub low: Vec<String>,
    /// Advice for the medium risk tier.
    #[serde(default = "default_medium_recommendations")]
    pub medium: Vec<String>,
    /// Advice for the high risk tier.
    #[serde(default = "default_high_recommendations")]
    pub high: Vec<String>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            low: default_low_recommendations(),
            medium: default_medium_recommendations(),
            high: default_high_recommendations(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_low_recommendations() -> Vec<String> {
    to_strings(&[
        "Keep contributing to your savings goal every month",
        "Consider investing part of your monthly surplus",
        "Review your budget every quarter to stay on track",
    ])
}

fn default_medium_recommendations() -> Vec<String> {
    to_strings(&[
        "Review subscriptions and recurring costs you no longer use",
        "Build an emergency fund covering at least three months of expenses",
        "Track daily spending to find quick savings",
    ])
}

fn default_high_recommendations() -> Vec<String> {
    to_strings(&[
        "Cut non-essential expenses immediately",
        "Look for an additional source of income",
        "Postpone large purchases until your balance recovers",
    ])
}

/// Savings suggestion configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionConfig {
    /// JSON file replacing the built-in suggestion catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`
    /// and `RUNWAY__`-prefixed environment variables (`__` separates
    /// sections, e.g. `RUNWAY__RISK__MIN_HEALTHY_SURPLUS`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RUNWAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration shape.
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
