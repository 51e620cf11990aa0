//! Shared types and configuration for Runway.
//!
//! This crate provides common building blocks used by the engine and its hosts:
//! - Money arithmetic with decimal precision (no floats)
//! - Configuration management (thresholds, recommendation tables, catalog location)

pub mod config;
pub mod types;

pub use config::AppConfig;
