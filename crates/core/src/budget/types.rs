//! Budget data types.

use rust_decimal::Decimal;
use runway_shared::types::Money;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Planned and actual spending for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name, e.g. "Food".
    pub category: String,
    /// Amount spent so far.
    pub actual: Money,
    /// Amount planned for the period.
    pub planned: Money,
}

impl BudgetCategory {
    /// Creates a category entry.
    #[must_use]
    pub fn new(category: impl Into<String>, actual: Money, planned: Money) -> Self {
        Self {
            category: category.into(),
            actual,
            planned,
        }
    }
}

/// Evaluation of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// Category name.
    pub category: String,
    /// Amount spent.
    pub actual: Money,
    /// Amount planned.
    pub planned: Money,
    /// `actual / planned * 100`, 2 decimal places.
    pub percentage_used: Decimal,
    /// True when `percentage_used > 100`.
    pub over_budget: bool,
    /// `max(0, actual - planned)`.
    pub overage_amount: Money,
    /// `max(0, planned - actual)`.
    pub remaining: Money,
}

/// Result for one category of a batch.
pub type BudgetOutcome = Result<BudgetStatus, BudgetError>;

/// Totals over the successfully evaluated categories of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOverview {
    /// Sum of planned amounts.
    pub total_planned: Money,
    /// Sum of actual amounts.
    pub total_actual: Money,
    /// `total_actual / total_planned * 100`, zero when nothing was evaluated.
    pub overall_percentage_used: Decimal,
    /// Categories over budget.
    pub over_budget_count: usize,
    /// Categories rejected with an error.
    pub rejected_count: usize,
}
