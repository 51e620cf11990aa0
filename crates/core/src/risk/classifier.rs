//! Risk classifier.

use runway_shared::config::RiskConfig;
use tracing::debug;

use super::types::{RecommendationTable, RiskAssessment, RiskLevel, RiskThresholds};
use crate::projection::ProjectionResult;
use crate::snapshot::FinancialSnapshot;

/// Maps a projection and the current surplus to a risk tier.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    thresholds: RiskThresholds,
    recommendations: RecommendationTable,
}

impl RiskClassifier {
    /// Creates a classifier with explicit thresholds and advice.
    #[must_use]
    pub const fn new(thresholds: RiskThresholds, recommendations: RecommendationTable) -> Self {
        Self {
            thresholds,
            recommendations,
        }
    }

    /// Creates a classifier from the `[risk]` configuration section.
    #[must_use]
    pub fn from_config(config: &RiskConfig) -> Self {
        Self::new(
            RiskThresholds::from(config),
            RecommendationTable::from(&config.recommendations),
        )
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Determines the risk tier. First match wins:
    ///
    /// 1. insolvency within `high_within_months` -> `High`
    /// 2. insolvency within `medium_within_months` -> `Medium`
    /// 3. monthly surplus below `min_healthy_surplus` -> `Medium`
    /// 4. otherwise -> `Low`
    #[must_use]
    pub fn level(&self, snapshot: &FinancialSnapshot, projection: &ProjectionResult) -> RiskLevel {
        let thresholds = &self.thresholds;

        match projection.insolvency_month {
            Some(month) if month <= thresholds.high_within_months => RiskLevel::High,
            Some(month) if month <= thresholds.medium_within_months => RiskLevel::Medium,
            _ if snapshot.monthly_surplus() < thresholds.min_healthy_surplus => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    /// Classifies a projection and attaches the tier's advice.
    #[must_use]
    pub fn classify(
        &self,
        snapshot: &FinancialSnapshot,
        projection: ProjectionResult,
    ) -> RiskAssessment {
        let level = self.level(snapshot, &projection);
        debug!(
            %level,
            insolvency_month = ?projection.insolvency_month,
            surplus = %snapshot.monthly_surplus(),
            "classified risk"
        );

        RiskAssessment {
            level,
            recommendations: self.recommendations.for_level(level).to_vec(),
            projection,
        }
    }
}
