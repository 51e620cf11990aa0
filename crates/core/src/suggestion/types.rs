//! Suggestion data types.

use rust_decimal::Decimal;
use runway_shared::types::Money;
use serde::{Deserialize, Serialize};

/// Effort needed to act on a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Can be done today.
    Easy,
    /// Needs a habit change.
    Medium,
    /// Needs planning or third parties.
    Hard,
}

/// A way to save money every month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingSuggestion {
    /// Short title.
    pub title: String,
    /// What to do.
    pub description: String,
    /// Spending category the saving comes from.
    pub category: String,
    /// Expected saving per month.
    pub potential_monthly_saving: Money,
    /// Effort tier.
    pub difficulty: Difficulty,
}

impl SavingSuggestion {
    /// Creates a suggestion.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        potential_monthly_saving: Money,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            potential_monthly_saving,
            difficulty,
        }
    }
}

/// Suggestions with their aggregate savings.
///
/// `total_annual` is always `total_monthly * 12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSummary {
    /// Suggestions in catalog order.
    pub suggestions: Vec<SavingSuggestion>,
    /// Sum of monthly savings.
    pub total_monthly: Money,
    /// Yearly equivalent of `total_monthly`.
    pub total_annual: Money,
}

impl SuggestionSummary {
    /// Monthly savings per difficulty tier.
    #[must_use]
    pub fn by_difficulty(&self) -> DifficultyTotals {
        let mut totals = DifficultyTotals::default();
        for suggestion in &self.suggestions {
            let slot = match suggestion.difficulty {
                Difficulty::Easy => &mut totals.easy,
                Difficulty::Medium => &mut totals.medium,
                Difficulty::Hard => &mut totals.hard,
            };
            *slot = slot.saturating_add(suggestion.potential_monthly_saving);
        }
        totals
    }
}

/// Monthly savings split by difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTotals {
    /// Savings from easy suggestions.
    pub easy: Decimal,
    /// Savings from medium suggestions.
    pub medium: Decimal,
    /// Savings from hard suggestions.
    pub hard: Decimal,
}
