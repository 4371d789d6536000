// Rust guideline compliant 2026-10-19

//! Core data models for the issue board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned issue identifier (format: iss-XXXXXX).
pub type IssueId = String;

/// Maximum accepted description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 4000;

/// Status of an issue in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Issue is reported and waiting to be picked up.
    Open,
    /// Issue is currently being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Issue is resolved. Terminal.
    Done,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Done];

    /// Returns the stored label for this status.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Parses an exact stored label.
    ///
    /// Returns `None` for anything that is not one of the three stored labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the stored label for this priority.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller-supplied fields for a new issue.
///
/// There is deliberately no status here: new issues always start `Open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInput {
    /// One-line summary.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// Optional free-form assignee identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Identity of the creator (session email).
    pub created_by: String,
}

impl IssueInput {
    /// Creates an input with the given text fields and defaults elsewhere.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
            assigned_to: None,
            created_by: created_by.into(),
        }
    }

    /// Trims text fields and drops a blank assignee.
    #[must_use]
    pub fn normalized(self) -> Self {
        let assigned_to = self
            .assigned_to
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            assigned_to,
            created_by: self.created_by.trim().to_string(),
        }
    }

    /// Validates the input before it reaches a store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title or description is blank
    /// - Description exceeds [`MAX_DESCRIPTION_CHARS`]
    /// - Creator identity is blank
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Title and description cannot be empty".to_string(),
            ));
        }

        let length = self.description.chars().count();
        if length > MAX_DESCRIPTION_CHARS {
            return Err(crate::Error::Validation(format!(
                "Description must be at most {} characters, got {}",
                MAX_DESCRIPTION_CHARS, length
            )));
        }

        if self.created_by.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Creator identity cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// A tracked issue as held by the issue store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique hash-based identifier (format: iss-XXXXXX).
    pub id: IssueId,
    /// One-line summary.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Priority level.
    pub priority: Priority,
    /// Current status in the FSM.
    pub status: Status,
    /// Optional free-form assignee identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Identity of the creator.
    pub created_by: String,
    /// Unix timestamp of creation, assigned by the store.
    pub created_at: i64,
}

impl Issue {
    /// Builds a freshly created issue from validated input.
    ///
    /// The status is always `Open` regardless of the caller.
    pub fn from_input(id: IssueId, input: IssueInput, created_at: i64) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            priority: input.priority,
            status: Status::Open,
            assigned_to: input.assigned_to,
            created_by: input.created_by,
            created_at,
        }
    }

    /// Validates stored issue data.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or description is empty, or the ID
    /// format is invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Title cannot be empty".to_string(),
            ));
        }

        if self.description.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Description cannot be empty".to_string(),
            ));
        }

        crate::identity::validate_id_format(&self.id)
    }
}
