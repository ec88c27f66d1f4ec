// Rust guideline compliant 2026-10-15

//! Mapping of Jira usernames to destination user ids.

use crate::{Error, Result, SourceItem};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// One row of the user mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMapping {
    /// Username in the Jira export.
    pub jira_username: String,
    /// Destination user id (UUID).
    pub ch_id: String,
    /// Destination project id associated with the user.
    #[serde(default)]
    pub ch_project_id: i64,
}

/// Lookup table from Jira username to destination user.
///
/// The table is read-only once built and is unique on `jira_username`.
#[derive(Debug, Clone, Default)]
pub struct UserMap {
    mappings: Vec<UserMapping>,
    index: HashMap<String, usize>,
}

impl UserMap {
    /// Builds a user map from mapping rows.
    ///
    /// # Arguments
    ///
    /// * `mappings` - Rows of the mapping table
    ///
    /// # Returns
    ///
    /// The user map.
    ///
    /// # Errors
    ///
    /// Returns an error if two rows share a `jira_username`.
    pub fn new(mappings: Vec<UserMapping>) -> Result<Self> {
        let mut index = HashMap::with_capacity(mappings.len());
        for (pos, mapping) in mappings.iter().enumerate() {
            if index.insert(mapping.jira_username.clone(), pos).is_some() {
                return Err(Error::InvalidConfig(format!(
                    "Duplicate user mapping for '{}'",
                    mapping.jira_username
                )));
            }
        }
        Ok(Self { mappings, index })
    }

    /// Loads mapping rows from a JSON array file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON file holding an array of [`UserMapping`]
    ///
    /// # Returns
    ///
    /// The user map.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a JSON array of mappings
    /// - Two rows share a `jira_username`
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mappings: Vec<UserMapping> = serde_json::from_str(&content)?;
        Self::new(mappings)
    }

    /// Returns the full mapping row for a username.
    pub fn get(&self, jira_username: &str) -> Option<&UserMapping> {
        self.index.get(jira_username).map(|&pos| &self.mappings[pos])
    }

    /// Resolves a Jira username to a destination user id.
    ///
    /// Unknown usernames, and rows with an empty id, are logged and yield
    /// `None`; callers decide on the fallback.
    pub fn resolve(&self, jira_username: &str) -> Option<&str> {
        let id = self.destination_id(jira_username);
        if id.is_none() {
            tracing::warn!(username = %jira_username, "Jira user not found in user map");
        }
        id
    }

    /// Returns true if the username resolves to a non-empty destination id.
    ///
    /// Same rule as [`UserMap::resolve`], without logging.
    pub fn is_resolvable(&self, jira_username: &str) -> bool {
        self.destination_id(jira_username).is_some()
    }

    fn destination_id(&self, jira_username: &str) -> Option<&str> {
        self.get(jira_username)
            .map(|mapping| mapping.ch_id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Returns true if the username has a mapping.
    pub fn contains(&self, jira_username: &str) -> bool {
        self.index.contains_key(jira_username)
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Collects every username referenced by the items that does not resolve.
    ///
    /// Assignees, reporters and comment authors are considered. Empty
    /// usernames (unassigned issues) are skipped. Rows with an empty id count
    /// as unmapped, as they do for [`UserMap::resolve`].
    pub fn unmapped<'a>(
        &self,
        items: impl IntoIterator<Item = &'a SourceItem>,
    ) -> BTreeSet<String> {
        let mut missing = BTreeSet::new();
        for item in items {
            let names = [item.assignee.as_str(), item.reporter.as_str()]
                .into_iter()
                .chain(item.comments.iter().map(|c| c.author.as_str()));
            for name in names {
                if !name.is_empty() && !self.is_resolvable(name) {
                    missing.insert(name.to_string());
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceComment;

    fn mapping(name: &str, id: &str) -> UserMapping {
        UserMapping {
            jira_username: name.to_string(),
            ch_id: id.to_string(),
            ch_project_id: 0,
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let users = UserMap::new(vec![mapping("alice", "ch-alice")]).unwrap();
        assert_eq!(users.resolve("alice"), Some("ch-alice"));
        assert_eq!(users.resolve("bob"), None);
        assert_eq!(users.resolve(""), None);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let result = UserMap::new(vec![mapping("alice", "a"), mapping("alice", "b")]);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_unmapped_collects_all_roles() {
        let users = UserMap::new(vec![mapping("alice", "a")]).unwrap();
        let item = SourceItem {
            assignee: "bob".to_string(),
            reporter: "alice".to_string(),
            comments: vec![SourceComment {
                author: "carol".to_string(),
                ..SourceComment::default()
            }],
            ..SourceItem::default()
        };
        let unassigned = SourceItem {
            reporter: "bob".to_string(),
            ..SourceItem::default()
        };

        let missing = users.unmapped([&item, &unassigned]);
        assert_eq!(
            missing.into_iter().collect::<Vec<_>>(),
            vec!["bob".to_string(), "carol".to_string()]
        );
    }

    #[test]
    fn test_empty_id_counts_as_unmapped() {
        let users = UserMap::new(vec![mapping("alice", "a"), mapping("dave", "")]).unwrap();
        let item = SourceItem {
            assignee: "dave".to_string(),
            reporter: "alice".to_string(),
            ..SourceItem::default()
        };

        assert!(users.contains("dave"));
        assert!(!users.is_resolvable("dave"));
        assert_eq!(users.resolve("dave"), None);
        assert_eq!(
            users.unmapped([&item]).into_iter().collect::<Vec<_>>(),
            vec!["dave".to_string()]
        );
    }
}
