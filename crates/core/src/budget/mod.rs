//! Budget tracking against planned spending per category.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{BudgetCategory, BudgetOutcome, BudgetOverview, BudgetStatus};
