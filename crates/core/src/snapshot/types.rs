//! Snapshot data types.

use std::fmt;

use rust_decimal::Decimal;
use runway_shared::types::{Money, MoneyMath, Rate};
use serde::{Deserialize, Serialize};

use super::error::InputError;

/// A point-in-time record of a user's finances.
///
/// Built by the caller for each forecast request and never mutated by the
/// engine. Growth rates are fractional per-month values (`0.05` = 5% per
/// month) and may be zero, positive or negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Balance available today.
    pub current_balance: Money,
    /// Income received per month.
    pub monthly_income: Money,
    /// Expenses paid per month.
    pub monthly_expenses: Money,
    /// Linear monthly growth applied to income.
    #[serde(default)]
    pub income_growth_rate: Rate,
    /// Linear monthly growth applied to expenses.
    #[serde(default)]
    pub expense_growth_rate: Rate,
    /// Balance the user wants to keep untouched.
    #[serde(default)]
    pub savings_goal: Money,
    /// Amount already put aside towards the savings goal.
    #[serde(default)]
    pub current_savings: Money,
}

impl FinancialSnapshot {
    /// Creates a snapshot with no growth and no savings goal.
    #[must_use]
    pub fn new(current_balance: Money, monthly_income: Money, monthly_expenses: Money) -> Self {
        Self {
            current_balance,
            monthly_income,
            monthly_expenses,
            income_growth_rate: Decimal::ZERO,
            expense_growth_rate: Decimal::ZERO,
            savings_goal: Decimal::ZERO,
            current_savings: Decimal::ZERO,
        }
    }

    /// Sets the monthly growth rates for income and expenses.
    #[must_use]
    pub fn with_growth(mut self, income_growth_rate: Rate, expense_growth_rate: Rate) -> Self {
        self.income_growth_rate = income_growth_rate;
        self.expense_growth_rate = expense_growth_rate;
        self
    }

    /// Sets the savings goal and the amount saved so far.
    #[must_use]
    pub fn with_savings(mut self, savings_goal: Money, current_savings: Money) -> Self {
        self.savings_goal = savings_goal;
        self.current_savings = current_savings;
        self
    }

    /// Checks that every money field is non-negative.
    ///
    /// Growth rates are not validated.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NegativeAmount` naming the first negative field.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("current_balance", self.current_balance),
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("savings_goal", self.savings_goal),
            ("current_savings", self.current_savings),
        ];

        match fields.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(InputError::NegativeAmount { field, value }),
            None => Ok(()),
        }
    }

    /// Monthly income minus monthly expenses. May be zero or negative.
    #[must_use]
    pub fn monthly_surplus(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }

    /// Current balance minus the savings goal. May be negative.
    #[must_use]
    pub fn safety_margin(&self) -> Money {
        self.current_balance - self.savings_goal
    }

    /// Months of today's surplus needed to set aside `amount`.
    #[must_use]
    pub fn months_to_cover(&self, amount: Money) -> MonthsToRecover {
        MonthsToRecover::for_amount(amount, self.monthly_surplus())
    }
}

/// How long a monthly surplus takes to cover an amount.
///
/// `Unreachable` marks a zero or negative surplus: a valid financial state
/// (perpetual deficit), not an error. A positive surplus always yields
/// `Months`, saturating at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthsToRecover {
    /// Covered after this many whole months.
    Months(u32),
    /// Never covered at the current surplus.
    Unreachable,
}

impl MonthsToRecover {
    /// Computes the months needed to cover `amount` with `surplus` per month.
    #[must_use]
    pub fn for_amount(amount: Money, surplus: Money) -> Self {
        MoneyMath::months_to_cover(amount, surplus).map_or(Self::Unreachable, Self::Months)
    }

    /// Returns true if nothing needs recovering.
    #[must_use]
    pub const fn is_immediate(self) -> bool {
        matches!(self, Self::Months(0))
    }
}

impl fmt::Display for MonthsToRecover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(1) => write!(f, "1 month"),
            Self::Months(months) => write!(f, "{months} months"),
            Self::Unreachable => write!(f, "never at the current surplus"),
        }
    }
}
