//! Purchase analysis error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::snapshot::InputError;

/// Purchase-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Purchase amount must be positive.
    #[error("Purchase amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// The snapshot itself is invalid.
    #[error(transparent)]
    Snapshot(#[from] InputError),
}
