//! Budget service for per-category evaluation.

use rust_decimal::Decimal;
use runway_shared::types::MoneyMath;
use tracing::warn;

use super::error::BudgetError;
use super::types::{BudgetCategory, BudgetOutcome, BudgetOverview, BudgetStatus};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Evaluates one category.
    ///
    /// - `percentage_used = actual / planned * 100`
    /// - `over_budget = percentage_used > 100`
    /// - `overage_amount = max(0, actual - planned)`
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NonPositivePlanned` if `planned <= 0`.
    /// Returns `BudgetError::NegativeActual` if `actual < 0`.
    /// Returns `BudgetError::Overflow` if the percentage is out of range.
    pub fn evaluate_category(category: &BudgetCategory) -> Result<BudgetStatus, BudgetError> {
        if category.actual < Decimal::ZERO {
            return Err(BudgetError::NegativeActual {
                category: category.category.clone(),
                actual: category.actual,
            });
        }
        if category.planned <= Decimal::ZERO {
            return Err(BudgetError::NonPositivePlanned {
                category: category.category.clone(),
                planned: category.planned,
            });
        }

        let percentage_used = MoneyMath::percent_of(category.actual, category.planned).ok_or_else(
            || BudgetError::Overflow {
                category: category.category.clone(),
                actual: category.actual,
                planned: category.planned,
            },
        )?;

        Ok(BudgetStatus {
            category: category.category.clone(),
            actual: category.actual,
            planned: category.planned,
            percentage_used,
            over_budget: percentage_used > Decimal::ONE_HUNDRED,
            overage_amount: MoneyMath::non_negative(category.actual - category.planned),
            remaining: MoneyMath::non_negative(category.planned - category.actual),
        })
    }

    /// Evaluates every category in order.
    ///
    /// A failing category yields an `Err` in its slot and never stops the
    /// rest of the batch.
    #[must_use]
    pub fn evaluate(categories: &[BudgetCategory]) -> Vec<BudgetOutcome> {
        categories
            .iter()
            .map(|category| {
                let outcome = Self::evaluate_category(category);
                if let Err(err) = &outcome {
                    warn!(category = %category.category, error = %err, "skipped budget category");
                }
                outcome
            })
            .collect()
    }

    /// Totals over the successful outcomes of a batch.
    #[must_use]
    pub fn summarize(outcomes: &[BudgetOutcome]) -> BudgetOverview {
        let mut overview = BudgetOverview::default();

        for outcome in outcomes {
            match outcome {
                Ok(status) => {
                    overview.total_planned = overview.total_planned.saturating_add(status.planned);
                    overview.total_actual = overview.total_actual.saturating_add(status.actual);
                    if status.over_budget {
                        overview.over_budget_count += 1;
                    }
                }
                Err(_) => overview.rejected_count += 1,
            }
        }

        if overview.total_planned > Decimal::ZERO {
            overview.overall_percentage_used =
                MoneyMath::percent_of(overview.total_actual, overview.total_planned)
                    .unwrap_or(Decimal::MAX);
        }
        overview
    }
}
