//! Suggestion catalogs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::service::SuggestionService;
use super::types::{Difficulty, SavingSuggestion, SuggestionSummary};

/// An ordered, replaceable list of savings suggestions.
///
/// Serializes as a plain JSON array so a catalog can be shipped as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionCatalog {
    suggestions: Vec<SavingSuggestion>,
}

impl SuggestionCatalog {
    /// Wraps a list of suggestions, keeping its order.
    #[must_use]
    pub const fn new(suggestions: Vec<SavingSuggestion>) -> Self {
        Self { suggestions }
    }

    /// The catalog shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            SavingSuggestion::new(
                "Cancel unused subscriptions",
                "Review streaming and app subscriptions you have not opened in the last month",
                "Subscriptions",
                Decimal::new(4500, 2),
                Difficulty::Easy,
            ),
            SavingSuggestion::new(
                "Switch to a cheaper mobile plan",
                "Compare your data usage with the plans offered by other carriers",
                "Utilities",
                Decimal::new(2500, 2),
                Difficulty::Easy,
            ),
            SavingSuggestion::new(
                "Cook at home more often",
                "Replace three restaurant meals a week with home-cooked meals",
                "Food",
                Decimal::new(12000, 2),
                Difficulty::Medium,
            ),
            SavingSuggestion::new(
                "Use public transport",
                "Commute by public transport two days a week instead of driving",
                "Transport",
                Decimal::new(8000, 2),
                Difficulty::Medium,
            ),
            SavingSuggestion::new(
                "Refinance high-interest debt",
                "Consolidate credit card balances into a lower-rate personal loan",
                "Debt",
                Decimal::new(15000, 2),
                Difficulty::Hard,
            ),
        ])
    }

    /// Suggestions in catalog order.
    #[must_use]
    pub fn suggestions(&self) -> &[SavingSuggestion] {
        &self.suggestions
    }

    /// Number of suggestions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Returns true if the catalog holds no suggestions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Totals for the whole catalog.
    #[must_use]
    pub fn summarize(&self) -> SuggestionSummary {
        SuggestionService::summarize(&self.suggestions)
    }

    /// Suggestions ordered by monthly saving, largest first.
    #[must_use]
    pub fn ranked(&self) -> Vec<SavingSuggestion> {
        SuggestionService::rank_by_saving(&self.suggestions)
    }

    /// A catalog limited to suggestions no harder than `max`.
    #[must_use]
    pub fn up_to(&self, max: Difficulty) -> Self {
        Self::new(SuggestionService::filter_by_difficulty(&self.suggestions, max))
    }
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
