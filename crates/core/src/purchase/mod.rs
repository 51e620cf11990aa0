//! What-if purchase impact analysis.

pub mod analyzer;
pub mod error;
pub mod types;


pub use analyzer::PurchaseAnalyzer;
pub use error::PurchaseError;
pub use types::{PurchaseImpactResult, PurchaseRequest, PurchaseVerdict};
