// Rust guideline compliant 2026-10-15

//! Workflow state mapping.
//!
//! Jira status names are matched exactly against a fixed table. Anything not in
//! the table lands in the backlog:
//!
//! - Open → backlog
//! - In Progress → in-development
//! - Blocked → blocked
//! - Code Review → selected
//! - Ready for QA → ready-for-qa
//! - In QA → in-qa
//! - Accepted → qa-passed
//! - Closed → closed

use serde::{Serialize, Serializer};

/// Destination workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    /// Not yet scheduled.
    Backlog,
    /// Picked for the current iteration.
    Selected,
    /// Being worked on.
    InDevelopment,
    /// Waiting on something else.
    Blocked,
    /// Waiting for QA.
    ReadyForQa,
    /// Under QA.
    InQa,
    /// QA passed.
    QaPassed,
    /// Done.
    Closed,
}

impl WorkflowState {
    /// Maps a Jira status name to a workflow state.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Open" => WorkflowState::Backlog,
            "In Progress" => WorkflowState::InDevelopment,
            "Blocked" => WorkflowState::Blocked,
            "Code Review" => WorkflowState::Selected,
            "Ready for QA" => WorkflowState::ReadyForQa,
            "In QA" => WorkflowState::InQa,
            "Accepted" => WorkflowState::QaPassed,
            "Closed" => WorkflowState::Closed,
            _ => WorkflowState::Backlog,
        }
    }

    /// Returns the state's code.
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowState::Backlog => "backlog",
            WorkflowState::Selected => "selected",
            WorkflowState::InDevelopment => "in-development",
            WorkflowState::Blocked => "blocked",
            WorkflowState::ReadyForQa => "ready-for-qa",
            WorkflowState::InQa => "in-qa",
            WorkflowState::QaPassed => "qa-passed",
            WorkflowState::Closed => "closed",
        }
    }

    /// Returns the destination workspace's numeric id for the state.
    pub fn id(&self) -> i64 {
        match self {
            WorkflowState::Backlog => 500000008,
            WorkflowState::Selected => 500000010,
            WorkflowState::InDevelopment => 500000006,
            WorkflowState::Blocked => 500000030,
            WorkflowState::ReadyForQa => 500000027,
            WorkflowState::InQa => 500000028,
            WorkflowState::QaPassed => 500000031,
            WorkflowState::Closed => 500000011,
        }
    }
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for WorkflowState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        let cases = [
            ("Open", "backlog", 500000008),
            ("In Progress", "in-development", 500000006),
            ("Blocked", "blocked", 500000030),
            ("Code Review", "selected", 500000010),
            ("Ready for QA", "ready-for-qa", 500000027),
            ("In QA", "in-qa", 500000028),
            ("Accepted", "qa-passed", 500000031),
            ("Closed", "closed", 500000011),
        ];
        for (status, code, id) in cases {
            let state = WorkflowState::from_status(status);
            assert_eq!(state.code(), code, "code for {status}");
            assert_eq!(state.id(), id, "id for {status}");
        }
    }

    #[test]
    fn test_unknown_status_is_backlog() {
        assert_eq!(WorkflowState::from_status("Resolved"), WorkflowState::Backlog);
        assert_eq!(WorkflowState::from_status("open"), WorkflowState::Backlog);
        assert_eq!(WorkflowState::from_status(""), WorkflowState::Backlog);
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&WorkflowState::ReadyForQa).unwrap();
        assert_eq!(json, "500000027");
    }
}
