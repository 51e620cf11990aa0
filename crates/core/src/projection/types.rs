//! Projection data types.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use runway_shared::types::Money;
use serde::{Deserialize, Serialize};

/// Horizon used when the caller does not pick one.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Options controlling a projection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    /// Number of future months to project.
    pub horizon_months: u32,
    /// First projected month, used only to label points.
    ///
    /// Any day of the month may be given; labels always use the 1st.
    #[serde(default)]
    pub start_month: Option<NaiveDate>,
}

impl ProjectionOptions {
    /// Creates options for `horizon_months` without period labels.
    #[must_use]
    pub const fn new(horizon_months: u32) -> Self {
        Self {
            horizon_months,
            start_month: None,
        }
    }

    /// Labels projected months starting from `start_month`.
    #[must_use]
    pub const fn starting(mut self, start_month: NaiveDate) -> Self {
        self.start_month = Some(start_month);
        self
    }

    /// First day of the given 1-based projected month, if labels are on.
    #[must_use]
    pub fn period_start(&self, month: u32) -> Option<NaiveDate> {
        self.start_month?
            .with_day(1)?
            .checked_add_months(Months::new(month.saturating_sub(1)))
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_MONTHS)
    }
}

/// One projected month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based month index.
    pub month: u32,
    /// First day of the month, when the run was labelled.
    pub period_start: Option<NaiveDate>,
    /// Projected income for the month.
    pub income: Money,
    /// Projected expenses for the month.
    pub expenses: Money,
    /// Income minus expenses.
    pub net: Money,
    /// Running balance at the end of the month.
    pub balance: Money,
}

/// Result of a projection run.
///
/// `monthly_balances` always holds one entry per projected month, even
/// after the balance has crossed zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// End-of-month balances, one per projected month.
    pub monthly_balances: Vec<Money>,
    /// 1-based index of the first month whose balance is zero or negative.
    pub insolvency_month: Option<u32>,
    /// Balance at the end of the last projected month.
    pub final_balance: Money,
    /// Smallest end-of-month balance over the horizon.
    pub lowest_balance: Money,
    /// Sum of monthly net amounts over the horizon, saturating.
    pub total_net_change: Money,
    /// Per-month breakdown.
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub(crate) fn from_points(
        opening_balance: Money,
        points: Vec<ProjectionPoint>,
        insolvency_month: Option<u32>,
    ) -> Self {
        let monthly_balances: Vec<Money> = points.iter().map(|p| p.balance).collect();
        let final_balance = monthly_balances.last().copied().unwrap_or(opening_balance);
        let lowest_balance = monthly_balances
            .iter()
            .copied()
            .min()
            .unwrap_or(opening_balance);
        let total_net_change = points
            .iter()
            .fold(Decimal::ZERO, |total, p| total.saturating_add(p.net));

        Self {
            monthly_balances,
            insolvency_month,
            final_balance,
            lowest_balance,
            total_net_change,
            points,
        }
    }

    /// Returns true if the balance never reaches zero over the horizon.
    #[must_use]
    pub const fn stays_solvent(&self) -> bool {
        self.insolvency_month.is_none()
    }

    /// Balance at the end of the given 1-based month.
    #[must_use]
    pub fn balance_at(&self, month: u32) -> Option<Money> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.monthly_balances.get(index).copied()
    }
}
