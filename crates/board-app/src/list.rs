// Rust guideline compliant 2026-10-19

//! Listing and filtering helpers for issues.

use crate::error::{AppError, Result};
use board_core::{Issue, Priority, Status};

/// List options for filtering issues.
///
/// Filters apply after the newest-first fetch, so `limit` bounds how many
/// issues are read, not how many are returned.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by priority.
    pub priority: Option<Priority>,
    /// Filter by assignee (case-insensitive).
    pub assigned_to: Option<String>,
    /// Filter by creator (case-insensitive).
    pub created_by: Option<String>,
    /// Maximum number of recent issues to read.
    pub limit: Option<usize>,
}

/// Parses a status string into a `Status` value.
///
/// Accepts the stored labels and the usual CLI spellings
/// (`open`, `in_progress`, `in-progress`, `done`).
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    match value.trim().to_lowercase().as_str() {
        "open" => Ok(Status::Open),
        "in progress" | "in_progress" | "in-progress" | "inprogress" => Ok(Status::InProgress),
        "done" => Ok(Status::Done),
        _ => Err(AppError::InvalidInput(format!("Invalid status: {}", value))),
    }
}

/// Parses a priority string into a `Priority` value.
///
/// # Errors
///
/// Returns an error if the priority is invalid.
pub fn parse_priority(value: &str) -> Result<Priority> {
    match value.trim().to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(AppError::InvalidInput(format!("Invalid priority: {}", value))),
    }
}

/// Filters issues based on `ListOptions`, keeping their order.
pub fn filter_issues(issues: Vec<Issue>, options: &ListOptions) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| {
            if let Some(status) = options.status {
                if issue.status != status {
                    return false;
                }
            }

            if let Some(priority) = options.priority {
                if issue.priority != priority {
                    return false;
                }
            }

            if let Some(ref assignee) = options.assigned_to {
                let matches = issue
                    .assigned_to
                    .as_deref()
                    .is_some_and(|value| value.eq_ignore_ascii_case(assignee));
                if !matches {
                    return false;
                }
            }

            if let Some(ref creator) = options.created_by {
                if !issue.created_by.eq_ignore_ascii_case(creator) {
                    return false;
                }
            }

            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::IssueInput;

    fn sample_issue(id: &str, priority: Priority, assignee: Option<&str>) -> Issue {
        let mut input = IssueInput::new("Title", "Body", "Dev@Example.com");
        input.priority = priority;
        input.assigned_to = assignee.map(str::to_string);
        Issue::from_input(id.to_string(), input, 1000)
    }

    #[test]
    fn test_parse_status_spellings() {
        assert_eq!(parse_status("In Progress").unwrap(), Status::InProgress);
        assert_eq!(parse_status("in-progress").unwrap(), Status::InProgress);
        assert_eq!(parse_status("DONE").unwrap(), Status::Done);
        assert!(parse_status("closed").is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("High").unwrap(), Priority::High);
        assert!(parse_priority("urgent").is_err());
    }

    #[test]
    fn test_filters_combine_and_keep_order() {
        let mut done = sample_issue("iss-000003", Priority::High, None);
        done.status = Status::Done;
        let issues = vec![
            sample_issue("iss-000001", Priority::High, Some("Owner@Team.com")),
            sample_issue("iss-000002", Priority::Low, Some("owner@team.com")),
            done,
        ];

        let options = ListOptions {
            status: Some(Status::Open),
            priority: Some(Priority::High),
            ..ListOptions::default()
        };
        let filtered = filter_issues(issues.clone(), &options);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "iss-000001");

        let options = ListOptions {
            assigned_to: Some("owner@team.com".to_string()),
            created_by: Some("dev@example.com".to_string()),
            ..ListOptions::default()
        };
        let ids: Vec<String> = filter_issues(issues, &options)
            .into_iter()
            .map(|issue| issue.id)
            .collect();
        assert_eq!(ids, vec!["iss-000001", "iss-000002"]);
    }
}
