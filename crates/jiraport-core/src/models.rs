// Rust guideline compliant 2026-10-15

//! Core data models for jiraport.
//!
//! Two families of types live here:
//! - the source model decoded from a Jira export ([`SourceItem`], [`SourceComment`])
//! - the destination records sent to the Shortcut import API ([`Epic`], [`Story`],
//!   [`Task`], [`StoryComment`], [`Label`]) and the assembled [`ImportData`] graph
//!
//! Destination records serialize to the import API's field names. Keys used only
//! for linking records together inside a batch are never serialized.

use crate::fields::CustomFields;
use crate::workflow::WorkflowState;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A single issue from the Jira export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceItem {
    /// Issue key, unique within the export (e.g. `PROJ-42`).
    pub key: String,
    /// Issue type name (`Epic`, `Sub-task`, `Bug`, `Task`, `Story`, ...).
    pub issue_type: String,
    /// One-line summary.
    pub summary: String,
    /// Description as exported, usually HTML.
    pub description: String,
    /// Workflow status name.
    pub status: String,
    /// Project display name.
    pub project: String,
    /// Assignee username, empty when unassigned.
    pub assignee: String,
    /// Reporter username.
    pub reporter: String,
    /// Labels in export order.
    pub labels: Vec<String>,
    /// Component names in export order.
    pub components: Vec<String>,
    /// Custom field values keyed by field name.
    pub custom_fields: CustomFields,
    /// Comments in export order.
    pub comments: Vec<SourceComment>,
    /// Creation timestamp string.
    pub created: String,
    /// Last update timestamp string.
    pub updated: String,
    /// Resolution timestamp string, empty when unresolved.
    pub resolved: String,
    /// Parent issue key, set only for sub-tasks.
    pub parent: Option<String>,
}

/// A comment attached to a [`SourceItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceComment {
    /// Jira comment id.
    pub id: String,
    /// Author username.
    pub author: String,
    /// Creation timestamp string.
    pub created: String,
    /// Comment body, usually HTML.
    pub body: String,
}

/// Story type understood by the destination service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    /// New functionality.
    Feature,
    /// Defect.
    Bug,
    /// Maintenance work.
    Chore,
}

/// A label attached to a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Label text.
    pub name: String,
}

impl Label {
    /// Creates a label from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A destination epic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Epic {
    /// Epic title.
    pub name: String,
    /// Plain-text description.
    pub description: String,
    /// Creation time.
    pub created_at: DateTime<FixedOffset>,
    /// Source key, kept for linking only.
    #[serde(skip)]
    pub key: String,
}

/// A destination task, nested under exactly one story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Task text.
    pub description: String,
    /// Completion flag. Always false for imported tasks.
    pub complete: bool,
    /// Source key of the sub-task.
    #[serde(skip)]
    pub key: String,
    /// Source key of the owning story.
    #[serde(skip)]
    pub parent: String,
}

/// A destination comment on a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryComment {
    /// Comment text.
    pub text: String,
    /// Destination user id of the author.
    pub author_id: String,
    /// Creation time.
    pub created_at: DateTime<FixedOffset>,
}

/// A destination story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    /// Story title.
    pub name: String,
    /// Plain-text description.
    pub description: String,
    /// Story type.
    pub story_type: StoryType,
    /// Workflow state, serialized as its numeric id.
    #[serde(rename = "workflow_state_id")]
    pub workflow_state: WorkflowState,
    /// Owner ids. Empty when the assignee is unmapped, never omitted.
    pub owner_ids: Vec<String>,
    /// Requester id. Never empty.
    #[serde(rename = "requested_by_id")]
    pub requested_by: String,
    /// Point estimate.
    pub estimate: i64,
    /// Labels in their fixed order.
    pub labels: Vec<Label>,
    /// Creation time.
    pub created_at: DateTime<FixedOffset>,
    /// Last update time.
    pub updated_at: DateTime<FixedOffset>,
    /// Completion time.
    pub completed_at: DateTime<FixedOffset>,
    /// Start time, approximated as one day before completion.
    pub started_at: DateTime<FixedOffset>,
    /// Destination group (team) id.
    pub group_id: String,
    /// External id, mirrors the source key.
    pub external_id: String,
    /// Links back to the source issue.
    pub external_links: Vec<String>,
    /// Comments in source order.
    pub comments: Vec<StoryComment>,
    /// Tasks attached by the linker.
    pub tasks: Vec<Task>,
    /// Source key, kept for linking only.
    #[serde(skip)]
    pub key: String,
    /// Key of the epic this story belongs to, if any.
    #[serde(skip)]
    pub epic_link: Option<String>,
}

/// The assembled output graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportData {
    /// Epics, not cross-linked to stories.
    pub epics: Vec<Epic>,
    /// Stories with their nested tasks and comments.
    pub stories: Vec<Story>,
}
