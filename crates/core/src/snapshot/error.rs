//! Input validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// The caller passed a structurally invalid snapshot or horizon.
///
/// These are never retried; the caller must validate and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A money field that must be non-negative was negative.
    #[error("{field} cannot be negative: {value}")]
    NegativeAmount {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// Projection horizon must cover at least one month.
    #[error("Projection horizon must be at least 1 month, got {0}")]
    InvalidHorizon(u32),
}
