//! Insolvency risk classification.

pub mod classifier;
pub mod types;


pub use classifier::RiskClassifier;
pub use types::{RecommendationTable, RiskAssessment, RiskLevel, RiskThresholds};
