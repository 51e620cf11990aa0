//! Goal progress types.

use rust_decimal::Decimal;
use runway_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::snapshot::MonthsToRecover;

/// How far the current savings are from the savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Target amount.
    pub savings_goal: Money,
    /// Amount saved so far.
    pub current_savings: Money,
    /// `max(0, savings_goal - current_savings)`.
    pub remaining: Money,
    /// Percentage reached, 0 to 100.
    pub percent_complete: Decimal,
    /// Months of today's surplus needed for `remaining`.
    pub months_to_goal: MonthsToRecover,
}

impl GoalProgress {
    /// Returns true once nothing remains to be saved.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.remaining.is_zero()
    }
}
