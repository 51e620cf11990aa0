//! Purchase data types.

use runway_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::snapshot::MonthsToRecover;

/// A hypothetical one-time expenditure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Amount to spend. Must be positive.
    pub amount: Money,
    /// Free text for display only.
    #[serde(default)]
    pub description: Option<String>,
}

impl PurchaseRequest {
    /// Creates a request without a description.
    #[must_use]
    pub const fn new(amount: Money) -> Self {
        Self {
            amount,
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Overall recommendation for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseVerdict {
    /// No significant impact.
    Recommended,
    /// Affordable, but eats into the savings goal.
    ImpactsSavingsGoal,
    /// Would leave a negative balance.
    NotRecommended,
}

/// Outcome of a purchase analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseImpactResult {
    /// True if the balance stays at or above zero.
    pub affordable: bool,
    /// Balance right after the purchase. May be negative.
    pub post_purchase_balance: Money,
    /// Balance available above the savings goal before the purchase.
    pub safety_margin: Money,
    /// Part of the purchase that cuts into the savings goal.
    pub savings_impact: Money,
    /// Months of surplus needed to restore the savings goal.
    pub months_to_recover_impact: MonthsToRecover,
    /// Months of surplus needed to cover a negative balance, if any.
    pub wait_months: Option<MonthsToRecover>,
    /// Overall recommendation.
    pub verdict: PurchaseVerdict,
    /// Human-readable verdict.
    pub message: String,
    /// Suggested alternative, when the purchase is not clearly fine.
    pub alternative_advice: Option<String>,
}
