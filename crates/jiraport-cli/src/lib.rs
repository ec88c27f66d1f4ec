// Rust guideline compliant 2026-10-15

//! Jiraport CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::inspect::{InspectReport, UnmappedUser};
pub use logging::init_tracing;
