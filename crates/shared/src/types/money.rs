//! Money and percentage arithmetic.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount in Runway is a `rust_decimal::Decimal` carried at cent
//! precision; this module holds the rounding, clamping and month-counting
//! helpers the engine shares.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// A monetary amount in the user's single currency.
pub type Money = Decimal;

/// A fractional per-month rate (e.g. `0.05` for 5% per month).
pub type Rate = Decimal;

/// Decimal places kept for money values (cents).
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept for percentages.
pub const PERCENT_DECIMAL_PLACES: u32 = 2;

/// Months in a year, used to annualize monthly amounts.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Money arithmetic helpers.
///
/// Rounding uses Banker's Rounding (`MidpointNearestEven`) so that long
/// projections do not drift in one direction.
pub struct MoneyMath;

impl MoneyMath {
    /// Rounds an amount to cents using Banker's Rounding.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use runway_shared::types::MoneyMath;
    ///
    /// assert_eq!(MoneyMath::round(dec!(10.125)), dec!(10.12));
    /// assert_eq!(MoneyMath::round(dec!(10.135)), dec!(10.14));
    /// ```
    #[must_use]
    pub fn round(value: Decimal) -> Money {
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
    }

    /// Returns `value`, or zero if it is negative.
    #[must_use]
    pub fn non_negative(value: Decimal) -> Decimal {
        value.max(Decimal::ZERO)
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
        value.max(min).min(max)
    }

    /// Converts a monthly amount into its yearly equivalent.
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN`.
    #[must_use]
    pub fn annualize(monthly: Money) -> Money {
        monthly.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Expresses `part` as a percentage of `whole`.
    ///
    /// Rounds away from zero at two decimals, so any value strictly above
    /// 100% never rounds back down to exactly `100.00`.
    ///
    /// Returns `None` if `whole` is not positive or the percentage does
    /// not fit in a `Decimal`.
    #[must_use]
    pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
        if whole <= Decimal::ZERO {
            return None;
        }
        let percent = part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)?;
        Some(percent.round_dp_with_strategy(PERCENT_DECIMAL_PLACES, RoundingStrategy::AwayFromZero))
    }

    /// Number of whole months needed to accumulate `amount` at `per_month`.
    ///
    /// Partial months count as full months. A non-positive `amount` needs
    /// zero months. Returns `None` when `per_month` is not positive: the
    /// amount is never covered. Counts beyond `u32::MAX` saturate.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use runway_shared::types::MoneyMath;
    ///
    /// assert_eq!(MoneyMath::months_to_cover(dec!(650), dec!(2000)), Some(1));
    /// assert_eq!(MoneyMath::months_to_cover(dec!(650), dec!(0)), None);
    /// ```
    #[must_use]
    pub fn months_to_cover(amount: Money, per_month: Money) -> Option<u32> {
        if amount <= Decimal::ZERO {
            return Some(0);
        }
        if per_month <= Decimal::ZERO {
            return None;
        }
        Some(
            amount
                .checked_div(per_month)
                .and_then(|months| months.ceil().to_u32())
                .unwrap_or(u32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(2.345), dec!(2.34))]
    #[case(dec!(2.355), dec!(2.36))]
    #[case(dec!(-2.345), dec!(-2.34))]
    #[case(dec!(100), dec!(100))]
    fn test_round_bankers(#[case] value: Decimal, #[case] expected: Decimal) {
        assert_eq!(MoneyMath::round(value), expected);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(MoneyMath::non_negative(dec!(-5)), Decimal::ZERO);
        assert_eq!(MoneyMath::non_negative(dec!(5)), dec!(5));
        assert_eq!(MoneyMath::non_negative(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(MoneyMath::clamp(dec!(150), dec!(0), dec!(100)), dec!(100));
        assert_eq!(MoneyMath::clamp(dec!(-1), dec!(0), dec!(100)), dec!(0));
        assert_eq!(MoneyMath::clamp(dec!(42.5), dec!(0), dec!(100)), dec!(42.5));
    }

    #[test]
    fn test_annualize() {
        assert_eq!(MoneyMath::annualize(dec!(125.50)), dec!(1506.00));
        assert_eq!(MoneyMath::annualize(Decimal::ZERO), Decimal::ZERO);
    }

    #[rstest]
    #[case(dec!(450), dec!(500), dec!(90))]
    #[case(dec!(600), dec!(500), dec!(120))]
    #[case(dec!(1), dec!(3), dec!(33.34))]
    #[case(dec!(0), dec!(500), dec!(0))]
    fn test_percent_of(#[case] part: Decimal, #[case] whole: Decimal, #[case] expected: Decimal) {
        assert_eq!(MoneyMath::percent_of(part, whole), Some(expected));
    }

    #[test]
    fn test_percent_of_non_positive_whole() {
        assert_eq!(MoneyMath::percent_of(dec!(10), Decimal::ZERO), None);
        assert_eq!(MoneyMath::percent_of(dec!(10), dec!(-1)), None);
    }

    #[test]
    fn test_percent_just_over_hundred_stays_over() {
        let pct = MoneyMath::percent_of(dec!(100.001), dec!(100)).unwrap();
        assert!(pct > Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_percent_of_overflow_is_none() {
        // Ratio fits, ratio * 100 does not
        let large = Decimal::from_i128_with_scale(700_000_000_000_000_000_000_000_000, 0);
        assert_eq!(MoneyMath::percent_of(large, dec!(0.01)), None);

        // Ratio itself does not fit
        let larger = Decimal::from_i128_with_scale(70_000_000_000_000_000_000_000_000_000, 0);
        assert_eq!(MoneyMath::percent_of(larger, dec!(0.001)), None);
    }

    #[test]
    fn test_annualize_saturates() {
        assert_eq!(MoneyMath::annualize(Decimal::MAX), Decimal::MAX);
        assert_eq!(MoneyMath::annualize(Decimal::MIN), Decimal::MIN);
    }

    #[test]
    fn test_months_to_cover_saturates_on_positive_surplus() {
        // 1e12 months does not fit in a u32
        assert_eq!(
            MoneyMath::months_to_cover(dec!(10000000000), dec!(0.01)),
            Some(u32::MAX)
        );
        assert_eq!(
            MoneyMath::months_to_cover(Decimal::MAX, dec!(0.0000001)),
            Some(u32::MAX)
        );
    }

    #[rstest]
    #[case(dec!(650), dec!(2000), Some(1))]
    #[case(dec!(2000), dec!(2000), Some(1))]
    #[case(dec!(2000.01), dec!(2000), Some(2))]
    #[case(dec!(0), dec!(100), Some(0))]
    #[case(dec!(-10), dec!(0), Some(0))]
    #[case(dec!(100), dec!(0), None)]
    #[case(dec!(100), dec!(-50), None)]
    fn test_months_to_cover(
        #[case] amount: Decimal,
        #[case] per_month: Decimal,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(MoneyMath::months_to_cover(amount, per_month), expected);
    }

    proptest! {
        /// Covering `months` full payments of `per_month` is never short.
        #[test]
        fn prop_months_to_cover_is_sufficient(
            amount_cents in 1i64..100_000_000,
            per_month_cents in 1i64..10_000_000,
        ) {
            let amount = Decimal::new(amount_cents, 2);
            let per_month = Decimal::new(per_month_cents, 2);

            let months = MoneyMath::months_to_cover(amount, per_month).unwrap();

            prop_assert!(Decimal::from(months) * per_month >= amount);
            prop_assert!(Decimal::from(months - 1) * per_month < amount);
        }

        #[test]
        fn prop_percent_of_never_negative(
            part_cents in 0i64..100_000_000,
            whole_cents in 1i64..100_000_000,
        ) {
            let pct = MoneyMath::percent_of(Decimal::new(part_cents, 2), Decimal::new(whole_cents, 2)).unwrap();
            prop_assert!(pct >= Decimal::ZERO);
        }
    }
}
