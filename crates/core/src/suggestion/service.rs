//! Suggestion aggregation.

use rust_decimal::Decimal;
use runway_shared::types::MoneyMath;

use super::types::{Difficulty, SavingSuggestion, SuggestionSummary};

/// Aggregates savings suggestions.
pub struct SuggestionService;

impl SuggestionService {
    /// Sums monthly savings and annualizes them, keeping catalog order.
    ///
    /// An empty catalog yields zero totals. Totals saturate at the `Decimal`
    /// range.
    #[must_use]
    pub fn summarize(catalog: &[SavingSuggestion]) -> SuggestionSummary {
        let total_monthly = catalog.iter().fold(Decimal::ZERO, |total, s| {
            total.saturating_add(s.potential_monthly_saving)
        });

        SuggestionSummary {
            suggestions: catalog.to_vec(),
            total_monthly,
            total_annual: MoneyMath::annualize(total_monthly),
        }
    }

    /// Suggestions ordered by monthly saving, largest first.
    ///
    /// Ties keep catalog order.
    #[must_use]
    pub fn rank_by_saving(catalog: &[SavingSuggestion]) -> Vec<SavingSuggestion> {
        let mut ranked = catalog.to_vec();
        ranked.sort_by(|a, b| b.potential_monthly_saving.cmp(&a.potential_monthly_saving));
        ranked
    }

    /// Suggestions no harder than `max`, in catalog order.
    #[must_use]
    pub fn filter_by_difficulty(
        catalog: &[SavingSuggestion],
        max: Difficulty,
    ) -> Vec<SavingSuggestion> {
        catalog
            .iter()
            .filter(|s| s.difficulty <= max)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn suggestion(title: &str, saving: Decimal, difficulty: Difficulty) -> SavingSuggestion {
        SavingSuggestion::new(title, "", "General", saving, difficulty)
    }

    #[test]
    fn test_summarize_totals() {
        let catalog = vec![
            suggestion("a", dec!(45), Difficulty::Easy),
            suggestion("b", dec!(120.50), Difficulty::Medium),
        ];

        let summary = SuggestionService::summarize(&catalog);

        assert_eq!(summary.total_monthly, dec!(165.50));
        assert_eq!(summary.total_annual, dec!(1986.00));
        assert_eq!(summary.suggestions, catalog);
    }

    #[test]
    fn test_summarize_empty_catalog() {
        let summary = SuggestionService::summarize(&[]);

        assert!(summary.suggestions.is_empty());
        assert_eq!(summary.total_monthly, Decimal::ZERO);
        assert_eq!(summary.total_annual, Decimal::ZERO);
    }

    #[test]
    fn test_summarize_saturates() {
        let catalog = vec![
            suggestion("a", Decimal::MAX, Difficulty::Easy),
            suggestion("b", Decimal::MAX, Difficulty::Hard),
        ];

        let summary = SuggestionService::summarize(&catalog);

        assert_eq!(summary.total_monthly, Decimal::MAX);
        assert_eq!(summary.total_annual, Decimal::MAX);
    }

    #[test]
    fn test_rank_by_saving_is_stable() {
        let catalog = vec![
            suggestion("small", dec!(10), Difficulty::Easy),
            suggestion("big", dec!(100), Difficulty::Hard),
            suggestion("tie-first", dec!(50), Difficulty::Easy),
            suggestion("tie-second", dec!(50), Difficulty::Medium),
        ];

        let titles: Vec<_> = SuggestionService::rank_by_saving(&catalog)
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(titles, vec!["big", "tie-first", "tie-second", "small"]);
    }

    #[test]
    fn test_filter_by_difficulty() {
        let catalog = vec![
            suggestion("hard", dec!(100), Difficulty::Hard),
            suggestion("easy", dec!(10), Difficulty::Easy),
            suggestion("medium", dec!(50), Difficulty::Medium),
        ];

        let titles: Vec<_> = SuggestionService::filter_by_difficulty(&catalog, Difficulty::Medium)
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(titles, vec!["easy", "medium"]);
    }

    #[test]
    fn test_by_difficulty_totals() {
        let catalog = vec![
            suggestion("a", dec!(10), Difficulty::Easy),
            suggestion("b", dec!(15), Difficulty::Easy),
            suggestion("c", dec!(100), Difficulty::Hard),
        ];

        let totals = SuggestionService::summarize(&catalog).by_difficulty();

        assert_eq!(totals.easy, dec!(25));
        assert_eq!(totals.medium, Decimal::ZERO);
        assert_eq!(totals.hard, dec!(100));
    }
}
