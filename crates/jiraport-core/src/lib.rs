// Rust guideline compliant 2026-10-15

//! jiraport Core Library
//!
//! This crate converts Jira XML exports into Shortcut import data:
//! - Source and destination data models
//! - XML export decoding and HTML text cleaning
//! - User mapping, custom field access, classification and workflow mapping
//! - Record builders, task linking and the conversion entry point
//! - Configuration and error types

pub mod build;
pub mod classify;
pub mod config;
pub mod convert;
pub mod decode;
pub mod error;
pub mod fields;
pub mod identity;
pub mod link;
pub mod models;
pub mod sanitize;
pub mod time;
pub mod workflow;

pub use classify::ItemKind;
pub use config::Config;
pub use convert::{convert, ConversionContext, ConversionSummary};
pub use decode::{decode_export, decode_file};
pub use error::{Error, Result};
pub use fields::CustomFields;
pub use identity::{UserMap, UserMapping};
pub use link::link_tasks;
pub use models::{
    Epic, ImportData, Label, SourceComment, SourceItem, Story, StoryComment, StoryType, Task,
};
pub use workflow::WorkflowState;
