//! Projection engine for balance forecasts.

use rust_decimal::Decimal;
use runway_shared::types::{Money, MoneyMath, Rate};
use tracing::debug;

use super::types::{ProjectionOptions, ProjectionPoint, ProjectionResult};
use crate::snapshot::{FinancialSnapshot, InputError};

/// Engine for projecting balances month by month.
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Projects the balance over `horizon_months`.
    ///
    /// See [`ProjectionEngine::project_with`].
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the snapshot holds a negative amount or the
    /// horizon is zero.
    pub fn project(
        snapshot: &FinancialSnapshot,
        horizon_months: u32,
    ) -> Result<ProjectionResult, InputError> {
        Self::project_with(snapshot, &ProjectionOptions::new(horizon_months))
    }

    /// Projects the balance using explicit options.
    ///
    /// For month `m` (1-based) income is `monthly_income * (1 + income_growth * m)`
    /// and expenses are `monthly_expenses * (1 + expense_growth * m)`: growth is
    /// linear in the month index, never compounded. The running balance starts
    /// at `current_balance` and accumulates each month's net amount.
    ///
    /// The first month whose balance is zero or negative is recorded as the
    /// insolvency month; the run still covers the full horizon.
    ///
    /// Extreme rates never fail the run: amounts and balances that leave the
    /// `Decimal` range saturate at `Decimal::MAX` or `Decimal::MIN`.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the snapshot holds a negative amount or the
    /// horizon is zero.
    pub fn project_with(
        snapshot: &FinancialSnapshot,
        options: &ProjectionOptions,
    ) -> Result<ProjectionResult, InputError> {
        snapshot.validate()?;
        if options.horizon_months == 0 {
            return Err(InputError::InvalidHorizon(options.horizon_months));
        }

        let mut balance = snapshot.current_balance;
        let mut insolvency_month = None;
        let mut points = Vec::with_capacity(options.horizon_months as usize);

        for month in 1..=options.horizon_months {
            let income =
                Self::projected_amount(snapshot.monthly_income, snapshot.income_growth_rate, month);
            let expenses = Self::projected_amount(
                snapshot.monthly_expenses,
                snapshot.expense_growth_rate,
                month,
            );
            let net = income.saturating_sub(expenses);
            balance = balance.saturating_add(net);

            if insolvency_month.is_none() && balance <= Decimal::ZERO {
                debug!(month, %balance, "projected balance reaches zero");
                insolvency_month = Some(month);
            }

            points.push(ProjectionPoint {
                month,
                period_start: options.period_start(month),
                income,
                expenses,
                net,
                balance,
            });
        }

        Ok(ProjectionResult::from_points(
            snapshot.current_balance,
            points,
            insolvency_month,
        ))
    }

    /// Amount for month `month` under linear growth, rounded to cents.
    ///
    /// Negative rates are applied as-is and may drive the amount below zero.
    /// Out-of-range results saturate.
    #[must_use]
    pub fn projected_amount(base: Money, rate: Rate, month: u32) -> Money {
        let growth = Decimal::ONE.saturating_add(rate.saturating_mul(Decimal::from(month)));
        MoneyMath::round(base.saturating_mul(growth))
    }
}
