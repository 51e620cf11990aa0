//! Purchase impact analyzer.

use rust_decimal::Decimal;
use runway_shared::types::{Money, MoneyMath};
use tracing::debug;

use super::error::PurchaseError;
use super::types::{PurchaseImpactResult, PurchaseRequest, PurchaseVerdict};
use crate::snapshot::{FinancialSnapshot, MonthsToRecover};

/// Verdict, message, alternative advice and wait period.
type Verdict = (
    PurchaseVerdict,
    String,
    Option<String>,
    Option<MonthsToRecover>,
);

/// Analyzes how a one-time purchase affects balance and savings goal.
pub struct PurchaseAnalyzer;

impl PurchaseAnalyzer {
    /// Runs the what-if analysis.
    ///
    /// - `post_purchase_balance = current_balance - amount`
    /// - `savings_impact = max(0, amount - (current_balance - savings_goal))`
    /// - `months_to_recover_impact = ceil(savings_impact / surplus)`, or
    ///   `Unreachable` when the surplus is zero or negative
    /// - `affordable = post_purchase_balance >= 0`
    ///
    /// # Errors
    ///
    /// Returns `PurchaseError::InvalidAmount` if the amount is not positive,
    /// or `PurchaseError::Snapshot` if the snapshot is invalid.
    pub fn analyze(
        snapshot: &FinancialSnapshot,
        request: &PurchaseRequest,
    ) -> Result<PurchaseImpactResult, PurchaseError> {
        if request.amount <= Decimal::ZERO {
            return Err(PurchaseError::InvalidAmount(request.amount));
        }
        snapshot.validate()?;

        let post_purchase_balance = snapshot.current_balance - request.amount;
        let safety_margin = snapshot.safety_margin();
        let savings_impact = MoneyMath::non_negative(request.amount.saturating_sub(safety_margin));
        let months_to_recover_impact = snapshot.months_to_cover(savings_impact);
        let affordable = post_purchase_balance >= Decimal::ZERO;

        let result = if affordable {
            if savings_impact > Decimal::ZERO {
                Self::impacts_savings(savings_impact, months_to_recover_impact)
            } else {
                Self::recommended()
            }
        } else {
            Self::not_recommended(snapshot, post_purchase_balance)
        };
        let (verdict, message, alternative_advice, wait_months) = result;

        debug!(
            amount = %request.amount,
            %post_purchase_balance,
            %savings_impact,
            ?verdict,
            "analyzed purchase"
        );

        Ok(PurchaseImpactResult {
            affordable,
            post_purchase_balance,
            safety_margin,
            savings_impact,
            months_to_recover_impact,
            wait_months,
            verdict,
            message,
            alternative_advice,
        })
    }

    fn recommended() -> Verdict {
        (
            PurchaseVerdict::Recommended,
            "Recommended: this purchase has no significant impact on your finances".to_string(),
            None,
            None,
        )
    }

    fn impacts_savings(savings_impact: Money, months: MonthsToRecover) -> Verdict {
        let advice = match months {
            MonthsToRecover::Months(_) => {
                format!("Your surplus restores the savings goal in {months}")
            }
            MonthsToRecover::Unreachable => {
                "Your current surplus cannot restore the savings goal; consider a smaller purchase"
                    .to_string()
            }
        };

        (
            PurchaseVerdict::ImpactsSavingsGoal,
            format!("Possible, but it reduces your savings goal by {savings_impact}"),
            Some(advice),
            None,
        )
    }

    fn not_recommended(snapshot: &FinancialSnapshot, post_purchase_balance: Money) -> Verdict {
        let shortfall = post_purchase_balance.abs();
        let wait = snapshot.months_to_cover(shortfall);
        let advice = match wait {
            MonthsToRecover::Months(_) => {
                format!("Wait {wait} and save the missing {shortfall} before buying")
            }
            MonthsToRecover::Unreachable => format!(
                "Your monthly surplus cannot cover the missing {shortfall}; reduce expenses before buying"
            ),
        };

        (
            PurchaseVerdict::NotRecommended,
            format!(
                "Not recommended: this purchase would leave a negative balance of {post_purchase_balance}"
            ),
            Some(advice),
            Some(wait),
        )
    }
}
