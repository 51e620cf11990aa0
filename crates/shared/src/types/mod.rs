//! Common types used across the workspace.

pub mod money;

pub use money::{Money, MoneyMath, Rate};
