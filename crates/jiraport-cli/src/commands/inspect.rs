// Rust guideline compliant 2026-10-15

//! Implementation of the `jiraport inspect` command.
//!
//! Reports what a conversion would see without producing output: item counts
//! per kind, usernames missing from the user map, and sub-tasks whose parent
//! story is not in the export.

use crate::commands::{load_config, load_users};
use crate::output::{two_column_table, write_line};
use anyhow::{Context, Result};
use jiraport_core::{decode_file, ItemKind, SourceItem, UserMap};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// An unmapped username and the roles it appears in.
///
/// The role decides what happens during conversion: an unmapped assignee
/// leaves the story without an owner, while an unmapped reporter or comment
/// author is replaced by the fallback user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmappedUser {
    /// Jira username.
    pub username: String,
    /// Appears as an assignee.
    pub assignee: bool,
    /// Appears as a reporter or comment author.
    pub requester_or_author: bool,
}

impl UnmappedUser {
    /// Describes the conversion outcome for this user.
    pub fn effect(&self, fallback_user: &str) -> String {
        let mut effects = Vec::new();
        if self.assignee {
            effects.push("assigned stories left unowned".to_string());
        }
        if self.requester_or_author {
            effects.push(format!("replaced by '{}'", fallback_user));
        }
        effects.join("; ")
    }
}

/// Pre-flight findings for an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectReport {
    /// Number of epics.
    pub epics: usize,
    /// Number of stories.
    pub stories: usize,
    /// Number of sub-tasks.
    pub sub_tasks: usize,
    /// Usernames that do not resolve, sorted by name.
    pub unmapped_users: Vec<UnmappedUser>,
    /// Sub-tasks whose parent is not a story, as `(task, parent)`.
    pub orphans: Vec<(String, String)>,
}

impl InspectReport {
    /// Builds the report for a decoded export.
    pub fn new(items: &[SourceItem], users: &UserMap) -> Self {
        let mut report = Self::default();
        let mut story_keys = HashSet::new();

        for item in items {
            match ItemKind::of(&item.issue_type) {
                ItemKind::Epic => report.epics += 1,
                ItemKind::SubTask => report.sub_tasks += 1,
                ItemKind::Story => {
                    report.stories += 1;
                    story_keys.insert(item.key.as_str());
                }
            }
        }

        report.orphans = items
            .iter()
            .filter(|item| ItemKind::of(&item.issue_type) == ItemKind::SubTask)
            .filter_map(|item| {
                let parent = item.parent.as_deref().unwrap_or_default();
                (!story_keys.contains(parent)).then(|| (item.key.clone(), parent.to_string()))
            })
            .collect();
        report.unmapped_users = unmapped_by_role(items, users);
        report
    }
}

fn unmapped_by_role(items: &[SourceItem], users: &UserMap) -> Vec<UnmappedUser> {
    let mut found: BTreeMap<String, UnmappedUser> = users
        .unmapped(items)
        .into_iter()
        .map(|name| {
            let user = UnmappedUser {
                username: name.clone(),
                ..UnmappedUser::default()
            };
            (name, user)
        })
        .collect();

    for item in items {
        if let Some(user) = found.get_mut(&item.assignee) {
            user.assignee = true;
        }
        let requesters = std::iter::once(&item.reporter)
            .chain(item.comments.iter().map(|comment| &comment.author));
        for name in requesters {
            if let Some(user) = found.get_mut(name) {
                user.requester_or_author = true;
            }
        }
    }

    found.into_values().collect()
}

/// Prints the pre-flight report for an export.
///
/// # Arguments
///
/// * `export` - Path to the Jira XML export
/// * `config_path` - Optional config file (defaults to `jiraport.toml`)
/// * `user_map` - Optional JSON user map replacing the config's users
///
/// # Returns
///
/// Ok if the report was printed, Err otherwise.
///
/// # Errors
///
/// Returns an error if the config, user map or export cannot be loaded.
pub fn execute(export: &Path, config_path: Option<&Path>, user_map: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let users = load_users(&config, user_map)?;
    let items = decode_file(export)
        .with_context(|| format!("Failed to decode export {}", export.display()))?;

    let report = InspectReport::new(&items, &users);
    let mut out = std::io::stdout().lock();

    let counts = two_column_table(
        ["Kind", "Count"],
        vec![
            ["Epics".to_string(), report.epics.to_string()],
            ["Stories".to_string(), report.stories.to_string()],
            ["Sub-tasks".to_string(), report.sub_tasks.to_string()],
        ],
    );
    write_line(&mut out, &counts)?;

    if report.unmapped_users.is_empty() {
        write_line(&mut out, "All users are mapped.")?;
    } else {
        let rows = report
            .unmapped_users
            .iter()
            .map(|user| [user.username.clone(), user.effect(&config.fallback_user)])
            .collect();
        write_line(&mut out, &two_column_table(["Unmapped user", "Effect"], rows))?;
    }

    if !report.orphans.is_empty() {
        let rows = report
            .orphans
            .iter()
            .map(|(task, parent)| [task.clone(), parent.clone()])
            .collect();
        write_line(&mut out, &two_column_table(["Orphan sub-task", "Missing parent"], rows))?;
    }

    Ok(())
}
