//! Financial snapshots supplied by the caller.

pub mod error;
pub mod types;

pub use error::InputError;
pub use types::{FinancialSnapshot, MonthsToRecover};
