// Rust guideline compliant 2026-10-15

//! Conversion of a decoded Jira export into Shortcut import data.
//!
//! The conversion runs in four steps:
//! 1. Partition items into epics, sub-tasks and stories
//! 2. Build destination records for each bucket
//! 3. Attach tasks to their parent stories
//! 4. Assemble the [`ImportData`] graph
//!
//! Epics are returned alongside stories but are not cross-linked to them; each
//! story only carries the key of its epic.

use crate::build::{build_epic, build_story, build_task};
use crate::classify::partition;
use crate::identity::UserMap;
use crate::link::link_tasks;
use crate::{Config, Error, ImportData, Result, SourceItem};
use chrono::{DateTime, FixedOffset};

/// Everything a conversion needs besides the source items.
///
/// The context is read-only during a conversion and can be reused across
/// batches.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    /// User mapping table.
    pub users: UserMap,
    /// Destination id of the fallback user, standing in for unmapped
    /// requesters and comment authors.
    pub fallback_id: String,
    /// Destination group id attached to every story.
    pub group_id: String,
    /// URL prefix for links back to Jira.
    pub link_base: String,
    /// Prefix of the project label.
    pub label_prefix: String,
    /// Instant substituted for unparseable timestamps.
    pub now: DateTime<FixedOffset>,
}

impl ConversionContext {
    /// Creates a conversion context.
    ///
    /// # Arguments
    ///
    /// * `users` - User mapping table
    /// * `fallback_user` - Jira username used when a requester or comment author is unmapped
    /// * `group_id` - Destination group id
    /// * `link_base` - URL prefix for external links
    /// * `label_prefix` - Prefix for the project label
    /// * `now` - Instant used for unparseable timestamps
    ///
    /// # Returns
    ///
    /// The context.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnmappedFallback` if `fallback_user` does not resolve to a
    /// non-empty destination id.
    pub fn new(
        users: UserMap,
        fallback_user: impl Into<String>,
        group_id: impl Into<String>,
        link_base: impl Into<String>,
        label_prefix: impl Into<String>,
        now: DateTime<FixedOffset>,
    ) -> Result<Self> {
        let fallback_user = fallback_user.into();
        let fallback_id = users
            .get(&fallback_user)
            .map(|mapping| mapping.ch_id.clone())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::UnmappedFallback(fallback_user))?;

        Ok(Self {
            users,
            fallback_id,
            group_id: group_id.into(),
            link_base: link_base.into(),
            label_prefix: label_prefix.into(),
            now,
        })
    }

    /// Creates a context from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured users contain duplicates or the
    /// fallback user is not mapped.
    pub fn from_config(config: &Config, now: DateTime<FixedOffset>) -> Result<Self> {
        let users = UserMap::new(config.users.clone())?;
        Self::with_users(config, users, now)
    }

    /// Creates a context from a configuration, replacing its user table.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback user is not in `users`.
    pub fn with_users(config: &Config, users: UserMap, now: DateTime<FixedOffset>) -> Result<Self> {
        Self::new(
            users,
            config.fallback_user.clone(),
            config.group_id.clone(),
            config.link_base.clone(),
            config.label_prefix.clone(),
            now,
        )
    }
}

/// Converts decoded Jira items into Shortcut import data.
///
/// # Arguments
///
/// * `items` - Every item of the export, in export order
/// * `ctx` - Conversion context
///
/// # Returns
///
/// Epics and stories, with sub-tasks nested under their stories.
///
/// # Errors
///
/// Returns an error if a sub-task's parent is not a story in `items`, or if two
/// stories share a key. No partial result is returned.
pub fn convert(items: &[SourceItem], ctx: &ConversionContext) -> Result<ImportData> {
    let parts = partition(items);
    tracing::info!(
        epics = parts.epics.len(),
        stories = parts.stories.len(),
        sub_tasks = parts.sub_tasks.len(),
        "converting Jira export"
    );

    let epics = parts
        .epics
        .iter()
        .map(|item| build_epic(item, ctx))
        .collect();
    let tasks = parts.sub_tasks.iter().map(|item| build_task(item)).collect();
    let mut stories: Vec<_> = parts
        .stories
        .iter()
        .map(|item| build_story(item, ctx))
        .collect();

    link_tasks(&mut stories, tasks)?;

    Ok(ImportData { epics, stories })
}

/// Record counts of a converted batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of epics.
    pub epics: usize,
    /// Number of stories.
    pub stories: usize,
    /// Number of tasks across all stories.
    pub tasks: usize,
    /// Number of comments across all stories.
    pub comments: usize,
    /// Stories without an owner.
    pub unowned_stories: usize,
}

impl ConversionSummary {
    /// Counts the records of an import graph.
    pub fn of(data: &ImportData) -> Self {
        Self {
            epics: data.epics.len(),
            stories: data.stories.len(),
            tasks: data.stories.iter().map(|s| s.tasks.len()).sum(),
            comments: data.stories.iter().map(|s| s.comments.len()).sum(),
            unowned_stories: data.stories.iter().filter(|s| s.owner_ids.is_empty()).count(),
        }
    }
}
