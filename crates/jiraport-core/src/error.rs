// Rust guideline compliant 2026-10-15

//! Error types for the jiraport core library.

use thiserror::Error;

/// Result type alias for jiraport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for jiraport operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The Jira XML export could not be decoded.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Configuration file or values are invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The designated fallback user has no entry in the user map.
    #[error("Fallback user '{0}' is not in the user map")]
    UnmappedFallback(String),

    /// A sub-task references a parent that is not a story in the batch.
    #[error("Orphan sub-task {task}: parent '{parent}' is not a story in this export")]
    OrphanTask {
        /// Key of the sub-task.
        task: String,
        /// Parent key carried by the sub-task.
        parent: String,
    },

    /// Two stories share the same key.
    #[error("Duplicate story key: {0}")]
    DuplicateKey(String),
}
