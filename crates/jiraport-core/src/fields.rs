// Rust guideline compliant 2026-10-15

//! Typed access to Jira custom fields.
//!
//! Jira attaches an open-ended list of custom fields to each issue. Three of them
//! carry meaning for the conversion: `Epic Link`, `Story Points` and `Sprint`.

use std::collections::BTreeMap;

/// Custom field holding the key of the owning epic.
pub const EPIC_LINK: &str = "Epic Link";
/// Custom field holding the point estimate.
pub const STORY_POINTS: &str = "Story Points";
/// Custom field holding every sprint the issue was part of, oldest first.
pub const SPRINT: &str = "Sprint";

/// Custom field values of a single issue, keyed by field name.
///
/// A field name may occur more than once in an export (two plugins can share a
/// display name). Every occurrence is kept in export order; lookups by name
/// read the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFields {
    values: BTreeMap<String, Vec<Vec<String>>>,
}

impl CustomFields {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of a field.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.values.entry(name.into()).or_default().push(values);
    }

    /// Returns the values of the first occurrence of a field, in export order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.occurrences(name).next()
    }

    /// Iterates over every occurrence of a field, in export order.
    pub fn occurrences<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.values
            .get(name)
            .into_iter()
            .flatten()
            .map(Vec::as_slice)
    }

    /// Returns true when no fields are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the key of the epic the issue belongs to.
    ///
    /// `None` means the issue is not part of any epic.
    pub fn epic_link(&self) -> Option<&str> {
        self.get(EPIC_LINK)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the point estimate, truncated toward zero.
    ///
    /// Missing or unparseable values yield 0.
    pub fn estimate(&self) -> i64 {
        let Some(raw) = self.get(STORY_POINTS).and_then(|values| values.first()) else {
            return 0;
        };
        match raw.trim().parse::<f64>() {
            Ok(points) => points.trunc() as i64,
            Err(err) => {
                tracing::debug!(value = %raw, error = %err, "ignoring unparseable story points");
                0
            }
        }
    }

    /// Returns the most recent sprint the issue was part of.
    ///
    /// Reads the first `Sprint` occurrence that carries any value; empty
    /// occurrences are skipped.
    pub fn last_sprint(&self) -> Option<&str> {
        self.occurrences(SPRINT)
            .find(|values| !values.is_empty())
            .and_then(|values| values.last())
            .map(String::as_str)
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for CustomFields {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, values) in iter {
            fields.insert(name, values);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(entries: &[(&str, &[&str])]) -> CustomFields {
        entries
            .iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_epic_link_present() {
        let f = fields(&[(EPIC_LINK, &["PROJ-1"])]);
        assert_eq!(f.epic_link(), Some("PROJ-1"));
    }

    #[test]
    fn test_epic_link_absent_or_empty() {
        assert_eq!(CustomFields::new().epic_link(), None);
        assert_eq!(fields(&[(EPIC_LINK, &[])]).epic_link(), None);
    }

    #[test]
    fn test_estimate_truncates() {
        assert_eq!(fields(&[(STORY_POINTS, &["3.7"])]).estimate(), 3);
        assert_eq!(fields(&[(STORY_POINTS, &["-2.9"])]).estimate(), -2);
        assert_eq!(fields(&[(STORY_POINTS, &["8"])]).estimate(), 8);
    }

    #[test]
    fn test_estimate_missing_or_invalid_is_zero() {
        assert_eq!(CustomFields::new().estimate(), 0);
        assert_eq!(fields(&[(STORY_POINTS, &[])]).estimate(), 0);
        assert_eq!(fields(&[(STORY_POINTS, &["lots"])]).estimate(), 0);
    }

    #[test]
    fn test_last_sprint_takes_most_recent() {
        let f = fields(&[(SPRINT, &["Sprint 1", "Sprint 2", "Sprint 3"])]);
        assert_eq!(f.last_sprint(), Some("Sprint 3"));
        assert_eq!(fields(&[(SPRINT, &[])]).last_sprint(), None);
    }

    #[test]
    fn test_last_sprint_skips_empty_occurrence() {
        let f = fields(&[(SPRINT, &[]), (SPRINT, &["S1", "S2"]), (SPRINT, &["S9"])]);
        assert_eq!(f.last_sprint(), Some("S2"));
        assert_eq!(f.occurrences(SPRINT).count(), 3);
    }

    #[test]
    fn test_first_entry_wins() {
        let f = fields(&[(EPIC_LINK, &["PROJ-1"]), (EPIC_LINK, &["PROJ-2"])]);
        assert_eq!(f.epic_link(), Some("PROJ-1"));

        let f = fields(&[(STORY_POINTS, &[]), (STORY_POINTS, &["5"])]);
        assert_eq!(f.estimate(), 0);
    }
}
