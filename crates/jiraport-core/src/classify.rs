// Rust guideline compliant 2026-10-15

//! Classification of Jira issues by type name.

use crate::{SourceItem, StoryType};

/// Which destination record a source item becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Becomes an [`Epic`](crate::Epic).
    Epic,
    /// Becomes a [`Task`](crate::Task) under its parent story.
    SubTask,
    /// Becomes a [`Story`](crate::Story). Covers every other type.
    Story,
}

impl ItemKind {
    /// Classifies a Jira issue type name.
    pub fn of(issue_type: &str) -> Self {
        match issue_type {
            "Epic" => ItemKind::Epic,
            "Sub-task" => ItemKind::SubTask,
            _ => ItemKind::Story,
        }
    }
}

impl StoryType {
    /// Maps a Jira issue type name to a story type.
    ///
    /// `Bug` becomes a bug, `Task` a chore, everything else a feature.
    pub fn from_issue_type(issue_type: &str) -> Self {
        match issue_type {
            "Bug" => StoryType::Bug,
            "Task" => StoryType::Chore,
            _ => StoryType::Feature,
        }
    }
}

/// Source items split by kind, each bucket in input order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// Items that become epics.
    pub epics: Vec<&'a SourceItem>,
    /// Items that become tasks.
    pub sub_tasks: Vec<&'a SourceItem>,
    /// Items that become stories.
    pub stories: Vec<&'a SourceItem>,
}

/// Splits items into epics, sub-tasks and stories.
pub fn partition(items: &[SourceItem]) -> Partition<'_> {
    let mut parts = Partition::default();
    for item in items {
        match ItemKind::of(&item.issue_type) {
            ItemKind::Epic => parts.epics.push(item),
            ItemKind::SubTask => parts.sub_tasks.push(item),
            ItemKind::Story => parts.stories.push(item),
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind() {
        assert_eq!(ItemKind::of("Epic"), ItemKind::Epic);
        assert_eq!(ItemKind::of("Sub-task"), ItemKind::SubTask);
        assert_eq!(ItemKind::of("Bug"), ItemKind::Story);
        assert_eq!(ItemKind::of("Task"), ItemKind::Story);
        assert_eq!(ItemKind::of("epic"), ItemKind::Story);
        assert_eq!(ItemKind::of(""), ItemKind::Story);
    }

    #[test]
    fn test_story_type() {
        assert_eq!(StoryType::from_issue_type("Bug"), StoryType::Bug);
        assert_eq!(StoryType::from_issue_type("Task"), StoryType::Chore);
        assert_eq!(StoryType::from_issue_type("Story"), StoryType::Feature);
        assert_eq!(StoryType::from_issue_type("Improvement"), StoryType::Feature);
    }

    #[test]
    fn test_partition_preserves_order() {
        let item = |key: &str, ty: &str| SourceItem {
            key: key.to_string(),
            issue_type: ty.to_string(),
            ..SourceItem::default()
        };
        let items = vec![
            item("P-1", "Epic"),
            item("P-2", "Story"),
            item("P-3", "Sub-task"),
            item("P-4", "Bug"),
        ];

        let parts = partition(&items);
        let keys = |v: &[&SourceItem]| v.iter().map(|i| i.key.clone()).collect::<Vec<_>>();
        assert_eq!(keys(&parts.epics), vec!["P-1"]);
        assert_eq!(keys(&parts.sub_tasks), vec!["P-3"]);
        assert_eq!(keys(&parts.stories), vec!["P-2", "P-4"]);
    }
}
