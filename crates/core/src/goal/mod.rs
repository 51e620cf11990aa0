//! Savings goal progress.

pub mod tracker;
pub mod types;

pub use tracker::GoalTracker;
pub use types::GoalProgress;
