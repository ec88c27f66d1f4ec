// Rust guideline compliant 2026-10-15

//! Builders for destination records.
//!
//! Each builder turns one source item (or comment) into one destination record.
//! Builders never fail: unresolved users and unparseable values fall back to
//! the policies described on each function.

use crate::convert::ConversionContext;
use crate::sanitize::html_to_text;
use crate::time::{parse_timestamp, parse_timestamp_with_delta};
use crate::{
    Epic, Label, SourceComment, SourceItem, Story, StoryComment, StoryType, Task, WorkflowState,
};

/// Text used for comments whose body is empty after cleaning.
pub const EMPTY_COMMENT: &str = "(empty)";

/// Builds an epic from a Jira epic.
pub fn build_epic(item: &SourceItem, ctx: &ConversionContext) -> Epic {
    tracing::debug!(key = %item.key, "building epic");
    Epic {
        name: html_to_text(&item.summary),
        description: html_to_text(&item.description),
        created_at: parse_timestamp(&item.created, ctx.now),
        key: item.key.clone(),
    }
}

/// Builds a task from a Jira sub-task.
///
/// The task text comes from the sub-task's summary. Tasks always start
/// incomplete, whatever the sub-task's status. A sub-task without a parent gets
/// an empty parent key, which the linker reports as an orphan.
pub fn build_task(item: &SourceItem) -> Task {
    Task {
        description: html_to_text(&item.summary),
        complete: false,
        key: item.key.clone(),
        parent: item.parent.clone().unwrap_or_default(),
    }
}

/// Builds a story comment.
///
/// A body that cleans down to a single newline becomes `(empty)`. When the
/// author is not in the user map the fallback user becomes the author and the
/// original username is prepended to the text.
pub fn build_comment(comment: &SourceComment, ctx: &ConversionContext) -> StoryComment {
    let mut text = html_to_text(&comment.body);
    if text == "\n" {
        text = EMPTY_COMMENT.to_string();
    }

    let author_id = match ctx.users.resolve(&comment.author) {
        Some(id) => id.to_string(),
        None => {
            text = format!("{}: {}", comment.author, text);
            ctx.fallback_id.clone()
        }
    };

    StoryComment {
        text,
        author_id,
        created_at: parse_timestamp(&comment.created, ctx.now),
    }
}

/// Builds a story from any Jira issue that is neither an epic nor a sub-task.
///
/// # Arguments
///
/// * `item` - The source issue
/// * `ctx` - Conversion context holding the user map and fixed values
///
/// # Returns
///
/// A story with no tasks attached; tasks are added by the linker.
pub fn build_story(item: &SourceItem, ctx: &ConversionContext) -> Story {
    let comments = item
        .comments
        .iter()
        .map(|comment| build_comment(comment, ctx))
        .collect();

    let owner_ids = if item.assignee.is_empty() {
        Vec::new()
    } else {
        ctx.users
            .resolve(&item.assignee)
            .map(|id| vec![id.to_string()])
            .unwrap_or_default()
    };

    let requested_by = ctx
        .users
        .resolve(&item.reporter)
        .map(str::to_string)
        .unwrap_or_else(|| ctx.fallback_id.clone());

    let workflow_state = WorkflowState::from_status(&item.status);

    tracing::debug!(
        key = %item.key,
        assignee = %item.assignee,
        status = %item.status,
        state = %workflow_state,
        "building story"
    );

    Story {
        name: html_to_text(&item.summary),
        description: html_to_text(&item.description),
        story_type: StoryType::from_issue_type(&item.issue_type),
        workflow_state,
        owner_ids,
        requested_by,
        estimate: item.custom_fields.estimate(),
        labels: story_labels(item, &ctx.label_prefix),
        created_at: parse_timestamp(&item.created, ctx.now),
        updated_at: parse_timestamp(&item.updated, ctx.now),
        completed_at: parse_timestamp(&item.resolved, ctx.now),
        // Jira has no start date; one day before resolution stands in for it.
        started_at: parse_timestamp_with_delta(&item.resolved, -1, ctx.now),
        group_id: ctx.group_id.clone(),
        external_id: item.key.clone(),
        external_links: vec![format!("{}{}", ctx.link_base, item.key)],
        comments,
        tasks: Vec::new(),
        key: item.key.clone(),
        epic_link: item.custom_fields.epic_link().map(str::to_string),
    }
}

/// Builds the label list of a story.
///
/// Order: lowercased Jira labels, the latest sprint, one label per component,
/// the project label, and the issue key itself. Duplicates are kept.
pub fn story_labels(item: &SourceItem, label_prefix: &str) -> Vec<Label> {
    let mut labels: Vec<Label> = item
        .labels
        .iter()
        .map(|label| Label::new(label.to_lowercase()))
        .collect();

    if let Some(sprint) = item.custom_fields.last_sprint() {
        labels.push(Label::new(sprint));
    }

    labels.extend(item.components.iter().map(Label::new));
    labels.push(Label::new(project_label(label_prefix, &item.key)));
    labels.push(Label::new(item.key.as_str()));
    labels
}

/// Derives the project label from an issue key.
///
/// Digits and dashes are trimmed from both ends of the key, so `PROJ-42`
/// with prefix `jira-` becomes `jira-PROJ`.
pub fn project_label(label_prefix: &str, key: &str) -> String {
    let project = key.trim_matches(|c: char| c == '-' || c.is_ascii_digit());
    format!("{}{}", label_prefix, project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_label() {
        assert_eq!(project_label("jira-", "PROJ-42"), "jira-PROJ");
        assert_eq!(project_label("jira-", "AB2-7"), "jira-AB");
        assert_eq!(project_label("", "X-1"), "X");
    }
}
