//! Goal tracker.

use rust_decimal::Decimal;
use runway_shared::types::MoneyMath;
use tracing::debug;

use super::types::GoalProgress;
use crate::snapshot::{FinancialSnapshot, InputError};

/// Measures progress toward the snapshot's savings goal.
pub struct GoalTracker;

impl GoalTracker {
    /// Computes goal progress from the snapshot.
    ///
    /// A zero goal counts as reached. Savings above the goal cap the
    /// percentage at 100.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NegativeAmount` if the snapshot is invalid.
    pub fn progress(snapshot: &FinancialSnapshot) -> Result<GoalProgress, InputError> {
        snapshot.validate()?;

        let remaining = MoneyMath::non_negative(snapshot.savings_goal - snapshot.current_savings);
        let percent_complete = MoneyMath::percent_of(snapshot.current_savings, snapshot.savings_goal)
            .map_or(Decimal::ONE_HUNDRED, |percent| {
                MoneyMath::clamp(percent, Decimal::ZERO, Decimal::ONE_HUNDRED)
            });
        let months_to_goal = snapshot.months_to_cover(remaining);

        debug!(%remaining, %percent_complete, %months_to_goal, "computed goal progress");

        Ok(GoalProgress {
            savings_goal: snapshot.savings_goal,
            current_savings: snapshot.current_savings,
            remaining,
            percent_complete,
            months_to_goal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MonthsToRecover;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_progress_partway() {
        let snapshot = FinancialSnapshot::new(dec!(2350), dec!(3200), dec!(1200))
            .with_savings(dec!(1000), dec!(750));

        let progress = GoalTracker::progress(&snapshot).unwrap();

        assert_eq!(progress.remaining, dec!(250));
        assert_eq!(progress.percent_complete, dec!(75));
        assert_eq!(progress.months_to_goal, MonthsToRecover::Months(1));
        assert!(!progress.is_reached());
    }

    #[rstest]
    #[case(dec!(1000), dec!(1000))]
    #[case(dec!(1000), dec!(1500))]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(0), dec!(200))]
    fn test_goal_reached(#[case] goal: Decimal, #[case] saved: Decimal) {
        let snapshot =
            FinancialSnapshot::new(dec!(100), dec!(1000), dec!(900)).with_savings(goal, saved);

        let progress = GoalTracker::progress(&snapshot).unwrap();

        assert!(progress.is_reached());
        assert_eq!(progress.percent_complete, dec!(100));
        assert_eq!(progress.months_to_goal, MonthsToRecover::Months(0));
    }

    #[test]
    fn test_progress_rounds_up_months() {
        let snapshot = FinancialSnapshot::new(dec!(0), dec!(1300), dec!(1000))
            .with_savings(dec!(1000), dec!(0));

        let progress = GoalTracker::progress(&snapshot).unwrap();

        assert_eq!(progress.percent_complete, dec!(0));
        // ceil(1000 / 300) = 4
        assert_eq!(progress.months_to_goal, MonthsToRecover::Months(4));
    }

    #[test]
    fn test_deficit_never_reaches_goal() {
        let snapshot = FinancialSnapshot::new(dec!(500), dec!(1000), dec!(1200))
            .with_savings(dec!(600), dec!(100));

        let progress = GoalTracker::progress(&snapshot).unwrap();

        assert_eq!(progress.months_to_goal, MonthsToRecover::Unreachable);
    }

    #[test]
    fn test_invalid_snapshot_rejected() {
        let snapshot = FinancialSnapshot::new(dec!(500), dec!(1000), dec!(1200))
            .with_savings(dec!(600), dec!(-1));

        assert_eq!(
            GoalTracker::progress(&snapshot),
            Err(InputError::NegativeAmount {
                field: "current_savings",
                value: dec!(-1),
            })
        );
    }
}
