//! Budget error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a single budget category cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Planned amount is zero or negative, so no percentage exists.
    #[error("Planned budget for {category} must be positive, got {planned}")]
    NonPositivePlanned {
        /// Category name.
        category: String,
        /// Offending planned amount.
        planned: Decimal,
    },

    /// Actual spending cannot be negative.
    #[error("Actual spending for {category} cannot be negative: {actual}")]
    NegativeActual {
        /// Category name.
        category: String,
        /// Offending actual amount.
        actual: Decimal,
    },

    /// Percentage used does not fit in a `Decimal`.
    #[error("Percentage used for {category} is out of range: {actual} of {planned}")]
    Overflow {
        /// Category name.
        category: String,
        /// Actual amount.
        actual: Decimal,
        /// Planned amount.
        planned: Decimal,
    },
}

impl BudgetError {
    /// Category the error belongs to.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::NonPositivePlanned { category, .. }
            | Self::NegativeActual { category, .. }
            | Self::Overflow { category, .. } => category,
        }
    }
}
