//! Command implementations.
//!
//! Each command builds a JSON report; `main` prints it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use runway_core::budget::{BudgetCategory, BudgetService};
use runway_core::goal::GoalTracker;
use runway_core::projection::{ProjectionEngine, ProjectionOptions};
use runway_core::purchase::{PurchaseAnalyzer, PurchaseRequest};
use runway_core::risk::RiskClassifier;
use runway_core::snapshot::FinancialSnapshot;
use runway_core::suggestion::SuggestionCatalog;
use runway_shared::AppConfig;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

/// Reads and parses a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Projection, risk assessment and goal progress for a snapshot.
pub fn forecast(
    config: &AppConfig,
    snapshot: &FinancialSnapshot,
    horizon: Option<u32>,
    start: Option<NaiveDate>,
) -> Result<Value> {
    let mut options = ProjectionOptions::new(horizon.unwrap_or(config.projection.horizon_months));
    if let Some(start) = start {
        options = options.starting(start);
    }

    let projection = ProjectionEngine::project_with(snapshot, &options)?;
    let assessment = RiskClassifier::from_config(&config.risk).classify(snapshot, projection);
    let goal = GoalTracker::progress(snapshot)?;
    let stays_solvent = assessment.projection.stays_solvent();
    info!(level = %assessment.level, stays_solvent, "forecast ready");

    Ok(json!({
        "stays_solvent": stays_solvent,
        "risk": assessment,
        "goal": goal,
    }))
}

/// Purchase impact report.
pub fn purchase(
    snapshot: &FinancialSnapshot,
    amount: Decimal,
    description: Option<String>,
) -> Result<Value> {
    let mut request = PurchaseRequest::new(amount);
    if let Some(description) = description {
        request = request.with_description(description);
    }

    let impact = PurchaseAnalyzer::analyze(snapshot, &request)?;
    info!(verdict = ?impact.verdict, "purchase analyzed");

    Ok(json!({
        "request": request,
        "impact": impact,
    }))
}

/// Loads the configured suggestion catalog, or the built-in one.
pub fn load_catalog(config: &AppConfig) -> Result<SuggestionCatalog> {
    match &config.suggestions.catalog_path {
        Some(path) => read_json(path),
        None => Ok(SuggestionCatalog::default()),
    }
}

/// Suggestion summary with per-difficulty totals.
pub fn suggestions(catalog: &SuggestionCatalog, ranked: bool) -> Value {
    let mut summary = catalog.summarize();
    if ranked {
        summary.suggestions = catalog.ranked();
    }
    let by_difficulty = summary.by_difficulty();

    json!({
        "summary": summary,
        "by_difficulty": by_difficulty,
    })
}

/// Per-category budget statuses and batch totals.
///
/// Rejected categories appear in place with their error message.
pub fn budget(categories: &[BudgetCategory]) -> Result<Value> {
    let outcomes = BudgetService::evaluate(categories);
    let overview = BudgetService::summarize(&outcomes);

    let items = outcomes
        .iter()
        .map(|outcome| match outcome {
            Ok(status) => serde_json::to_value(status).map(|status| json!({ "ok": status })),
            Err(e) => Ok(json!({
                "error": {
                    "category": e.category(),
                    "message": e.to_string(),
                }
            })),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "categories": items,
        "overview": overview,
    }))
}
