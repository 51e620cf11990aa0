//! Property-based tests for budget module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::BudgetService;
use super::types::BudgetCategory;

fn category() -> impl Strategy<Value = BudgetCategory> {
    (0i64..100_000_000, -10_000i64..100_000_000)
        .prop_map(|(actual, planned)| {
            BudgetCategory::new("Category", Decimal::new(actual, 2), Decimal::new(planned, 2))
        })
}

proptest! {
    /// For valid categories: percentage_used >= 0 and
    /// over_budget == (percentage_used > 100).
    #[test]
    fn prop_percentage_bounds(
        actual in 0i64..100_000_000,
        planned in 1i64..100_000_000,
    ) {
        let category = BudgetCategory::new("Food", Decimal::new(actual, 2), Decimal::new(planned, 2));

        let status = BudgetService::evaluate_category(&category).unwrap();

        prop_assert!(status.percentage_used >= Decimal::ZERO);
        prop_assert_eq!(status.over_budget, status.percentage_used > dec!(100));
        prop_assert_eq!(status.over_budget, status.overage_amount > Decimal::ZERO);
        prop_assert_eq!(status.overage_amount, (category.actual - category.planned).max(Decimal::ZERO));
    }

    /// Planned <= 0 is rejected and never panics.
    #[test]
    fn prop_non_positive_planned_rejected(
        actual in 0i64..100_000_000,
        planned in -100_000_000i64..=0,
    ) {
        let category = BudgetCategory::new("Food", Decimal::new(actual, 2), Decimal::new(planned, 2));

        prop_assert!(BudgetService::evaluate_category(&category).is_err());
    }

    /// One output per input, in order; failures only where planned <= 0.
    #[test]
    fn prop_batch_is_per_item(categories in prop::collection::vec(category(), 0..30)) {
        let outcomes = BudgetService::evaluate(&categories);

        prop_assert_eq!(outcomes.len(), categories.len());
        for (category, outcome) in categories.iter().zip(&outcomes) {
            prop_assert_eq!(outcome.is_err(), category.planned <= Decimal::ZERO);
        }

        let overview = BudgetService::summarize(&outcomes);
        prop_assert_eq!(
            overview.rejected_count,
            categories.iter().filter(|c| c.planned <= Decimal::ZERO).count()
        );
    }
}
