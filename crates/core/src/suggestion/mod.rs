//! Savings suggestions and their totals.

pub mod catalog;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::SuggestionCatalog;
pub use service::SuggestionService;
pub use types::{Difficulty, DifficultyTotals, SavingSuggestion, SuggestionSummary};
