//! Risk data types.

use std::fmt;

use rust_decimal::Decimal;
use runway_shared::config::{RecommendationConfig, RiskConfig};
use runway_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;

/// Risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Balance stays healthy.
    Low,
    /// Insolvency within the medium window, or a thin surplus.
    Medium,
    /// Insolvency within the high window.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Boundaries between risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Insolvency at or before this month is `High`.
    pub high_within_months: u32,
    /// Insolvency at or before this month is `Medium`.
    pub medium_within_months: u32,
    /// A monthly surplus below this amount is `Medium`.
    pub min_healthy_surplus: Money,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_within_months: 3,
            medium_within_months: 6,
            min_healthy_surplus: Decimal::from(500),
        }
    }
}

impl From<&RiskConfig> for RiskThresholds {
    fn from(config: &RiskConfig) -> Self {
        Self {
            high_within_months: config.high_within_months,
            medium_within_months: config.medium_within_months,
            min_healthy_surplus: config.min_healthy_surplus,
        }
    }
}

/// Ordered advice for each risk tier.
///
/// Injected into the classifier so the text can be localized or replaced
/// in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTable {
    low: Vec<String>,
    medium: Vec<String>,
    high: Vec<String>,
}

impl RecommendationTable {
    /// Creates a table from one list per tier.
    #[must_use]
    pub const fn new(low: Vec<String>, medium: Vec<String>, high: Vec<String>) -> Self {
        Self { low, medium, high }
    }

    /// Advice for the given tier, in display order.
    #[must_use]
    pub fn for_level(&self, level: RiskLevel) -> &[String] {
        match level {
            RiskLevel::Low => &self.low,
            RiskLevel::Medium => &self.medium,
            RiskLevel::High => &self.high,
        }
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::from(&RecommendationConfig::default())
    }
}

impl From<&RecommendationConfig> for RecommendationTable {
    fn from(config: &RecommendationConfig) -> Self {
        Self::new(
            config.low.clone(),
            config.medium.clone(),
            config.high.clone(),
        )
    }
}

/// Result of classifying a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk tier.
    pub level: RiskLevel,
    /// Projection the tier was derived from.
    pub projection: ProjectionResult,
    /// Advice for the tier, in display order.
    pub recommendations: Vec<String>,
}
