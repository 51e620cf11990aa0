//! Forecasting and advisory engine for Runway.
//!
//! Pure, synchronous calculations over a caller-supplied snapshot. No I/O,
//! no clock, no shared state: identical inputs give identical outputs.
//!
//! # Modules
//!
//! - `snapshot` - Input snapshot and validation
//! - `projection` - Month-by-month balance projection
//! - `risk` - Insolvency risk tiers and advice
//! - `purchase` - What-if analysis of one-time purchases
//! - `suggestion` - Savings suggestions and their totals
//! - `budget` - Planned vs actual spending per category
//! - `goal` - Savings goal progress

pub mod budget;
pub mod goal;
pub mod projection;
pub mod purchase;
pub mod risk;
pub mod snapshot;
pub mod suggestion;

use budget::{BudgetCategory, BudgetOutcome, BudgetOverview, BudgetService};
use goal::{GoalProgress, GoalTracker};
use projection::{ProjectionEngine, ProjectionResult};
use purchase::{PurchaseAnalyzer, PurchaseError, PurchaseImpactResult, PurchaseRequest};
use risk::{RiskAssessment, RiskClassifier};
use snapshot::{FinancialSnapshot, InputError};
use suggestion::{SavingSuggestion, SuggestionService, SuggestionSummary};

/// Projects the balance over `horizon_months` months.
///
/// # Errors
///
/// Returns `InputError` for a negative snapshot amount or a zero horizon.
pub fn project(
    snapshot: &FinancialSnapshot,
    horizon_months: u32,
) -> Result<ProjectionResult, InputError> {
    ProjectionEngine::project(snapshot, horizon_months)
}

/// Classifies a projection with the default thresholds and advice.
#[must_use]
pub fn classify_risk(snapshot: &FinancialSnapshot, projection: ProjectionResult) -> RiskAssessment {
    RiskClassifier::default().classify(snapshot, projection)
}

/// Analyzes a one-time purchase.
///
/// # Errors
///
/// Returns `PurchaseError` for a non-positive amount or an invalid snapshot.
pub fn analyze_purchase(
    snapshot: &FinancialSnapshot,
    request: &PurchaseRequest,
) -> Result<PurchaseImpactResult, PurchaseError> {
    PurchaseAnalyzer::analyze(snapshot, request)
}

/// Sums and annualizes a suggestion catalog.
#[must_use]
pub fn summarize_suggestions(catalog: &[SavingSuggestion]) -> SuggestionSummary {
    SuggestionService::summarize(catalog)
}

/// Evaluates each budget category independently.
#[must_use]
pub fn evaluate_budget(categories: &[BudgetCategory]) -> Vec<BudgetOutcome> {
    BudgetService::evaluate(categories)
}

/// Totals a batch of budget outcomes.
#[must_use]
pub fn summarize_budget(outcomes: &[BudgetOutcome]) -> BudgetOverview {
    BudgetService::summarize(outcomes)
}

/// Progress toward the snapshot's savings goal.
///
/// # Errors
///
/// Returns `InputError` if the snapshot is invalid.
pub fn goal_progress(snapshot: &FinancialSnapshot) -> Result<GoalProgress, InputError> {
    GoalTracker::progress(snapshot)
}
