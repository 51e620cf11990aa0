//! Forward balance projections.

pub mod engine;
pub mod types;


pub use engine::ProjectionEngine;
pub use types::{DEFAULT_HORIZON_MONTHS, ProjectionOptions, ProjectionPoint, ProjectionResult};
