//! Rolegate Core - Core data structures and shared infrastructure
//!
//! This crate defines the group-membership data model and the infrastructure
//! shared across the rolegate workspace: structured errors, logging setup,
//! and TOML-backed configuration.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
