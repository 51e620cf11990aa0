//! Property-based tests for suggestion module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::SuggestionService;
use super::types::{Difficulty, SavingSuggestion};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn suggestion() -> impl Strategy<Value = SavingSuggestion> {
    ("[a-z]{1,12}", 0i64..10_000_000, difficulty()).prop_map(|(title, cents, difficulty)| {
        SavingSuggestion::new(title, "", "General", Decimal::new(cents, 2), difficulty)
    })
}

fn catalog() -> impl Strategy<Value = Vec<SavingSuggestion>> {
    prop::collection::vec(suggestion(), 0..20)
}

proptest! {
    /// total_annual == total_monthly * 12, including the empty catalog.
    #[test]
    fn prop_annual_is_twelve_months(catalog in catalog()) {
        let summary = SuggestionService::summarize(&catalog);

        prop_assert_eq!(summary.total_annual, summary.total_monthly * Decimal::from(12));
    }

    /// total_monthly is the sum of every suggestion and order is kept.
    #[test]
    fn prop_summary_keeps_catalog(catalog in catalog()) {
        let summary = SuggestionService::summarize(&catalog);
        let expected: Decimal = catalog.iter().map(|s| s.potential_monthly_saving).sum();

        prop_assert_eq!(summary.total_monthly, expected);
        prop_assert_eq!(summary.suggestions, catalog);
    }

    /// Difficulty totals partition the monthly total.
    #[test]
    fn prop_difficulty_totals_partition(catalog in catalog()) {
        let summary = SuggestionService::summarize(&catalog);
        let totals = summary.by_difficulty();

        prop_assert_eq!(totals.easy + totals.medium + totals.hard, summary.total_monthly);
    }

    /// Ranking is a non-increasing permutation of the catalog.
    #[test]
    fn prop_ranking_is_sorted(catalog in catalog()) {
        let ranked = SuggestionService::rank_by_saving(&catalog);

        prop_assert_eq!(ranked.len(), catalog.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].potential_monthly_saving >= pair[1].potential_monthly_saving);
        }
        prop_assert_eq!(
            SuggestionService::summarize(&ranked).total_monthly,
            SuggestionService::summarize(&catalog).total_monthly
        );
    }
}
