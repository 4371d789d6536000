// Rust guideline compliant 2026-10-19

//! Output formatting module for the issue board CLI.
//!
//! This module provides functionality for formatting board data
//! in various output formats (JSON, table, plain text).

use crate::terminal::{paint, wrap_text};
use board_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use board_core::{Issue, OutputFormat, SimilarityMatch, Status, User};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// Output formatter trait.
///
/// Defines the interface for formatting board data in different output formats.
pub trait OutputFormatter {
    /// Formats a single issue for display.
    fn format_issue(&self, issue: &Issue) -> String;

    /// Formats a list of issues for display.
    fn format_list(&self, issues: &[Issue]) -> String;

    /// Formats a newly created issue.
    fn format_created(&self, issue: &Issue) -> String;

    /// Formats likely duplicates.
    ///
    /// # Arguments
    /// * `action` - The command that ran the check
    /// * `matches` - Ranked matches, best first
    fn format_matches(&self, action: &'static str, matches: &[SimilarityMatch]) -> String;

    /// Formats a completed status change.
    fn format_status_change(&self, id: &str, status: Status) -> String;

    /// Formats the signed-in user, if any.
    fn format_user(&self, action: &'static str, user: Option<&User>) -> String;

    /// Formats a short confirmation message.
    fn format_message(&self, action: &'static str, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &AppError) -> String;
}

/// Renders a Unix timestamp as a UTC date and time.
///
/// Out-of-range values fall back to the raw number.
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0)
        .map(|time| time.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// JSON output formatter.
///
/// Wraps every result in a success or error envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(action: &'static str, result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(action, result))
            .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        Self::envelope("show", issue)
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        Self::envelope(
            "list",
            json!({
                "issues": issues,
                "total": issues.len(),
            }),
        )
    }

    fn format_created(&self, issue: &Issue) -> String {
        Self::envelope(
            "create",
            json!({
                "outcome": "created",
                "issue": issue,
            }),
        )
    }

    fn format_matches(&self, action: &'static str, matches: &[SimilarityMatch]) -> String {
        if action == "create" {
            return Self::envelope(
                action,
                json!({
                    "outcome": "possible_duplicates",
                    "matches": matches,
                }),
            );
        }
        Self::envelope(
            action,
            json!({
                "matches": matches,
                "total": matches.len(),
            }),
        )
    }

    fn format_status_change(&self, id: &str, status: Status) -> String {
        Self::envelope("status", json!({ "id": id, "status": status }))
    }

    fn format_user(&self, action: &'static str, user: Option<&User>) -> String {
        Self::envelope(action, json!({ "user": user }))
    }

    fn format_message(&self, action: &'static str, message: &str) -> String {
        Self::envelope(action, json!({ "message": message }))
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "status": "error", "message": error.user_message() }).to_string())
    }
}

/// Table output formatter.
///
/// Formats issues as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_color(status: Status) -> Color {
        match status {
            Status::Open => Color::Cyan,
            Status::InProgress => Color::Yellow,
            Status::Done => Color::Green,
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", issue.id));
        output.push_str(&format!("Title:       {}\n", issue.title));
        output.push_str(&format!(
            "Status:      {}\n",
            paint(
                issue.status.label(),
                Self::status_color(issue.status),
                true,
                self.use_color
            )
        ));
        output.push_str(&format!("Priority:    {}\n", issue.priority));
        if let Some(assignee) = &issue.assigned_to {
            output.push_str(&format!("Assigned to: {}\n", assignee));
        }
        output.push_str(&format!("Created by:  {}\n", issue.created_by));
        output.push_str(&format!(
            "Created:     {}\n",
            format_timestamp(issue.created_at)
        ));
        output.push_str(&format!(
            "Description: {}\n",
            wrap_text(&issue.description, 13)
        ));

        output
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Priority", "Title", "Assigned to", "Created"]);

        for issue in issues {
            builder.push_record(vec![
                issue.id.clone(),
                issue.status.to_string(),
                issue.priority.to_string(),
                issue.title.clone(),
                issue.assigned_to.clone().unwrap_or_else(|| "-".to_string()),
                format_timestamp(issue.created_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_created(&self, issue: &Issue) -> String {
        format!(
            "{} {}\n  Title: {}\n  Priority: {}",
            paint("✓ Created issue:", Color::Green, true, self.use_color),
            issue.id,
            issue.title,
            issue.priority
        )
    }

    fn format_matches(&self, action: &'static str, matches: &[SimilarityMatch]) -> String {
        if matches.is_empty() {
            return "No similar issues found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Score", "ID", "Status", "Title"]);
        for found in matches {
            builder.push_record(vec![
                format!("{:.2}", found.score),
                found.issue.id.clone(),
                found.issue.status.to_string(),
                found.issue.title.clone(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = String::new();
        if action == "create" {
            output.push_str(&paint(
                "⚠ Possible duplicates found. The issue was not created.",
                Color::Yellow,
                true,
                self.use_color,
            ));
            output.push('\n');
        }
        output.push_str(&table.to_string());
        if action == "create" {
            output.push_str("\nRe-run with --force to create it anyway.");
        }
        output
    }

    fn format_status_change(&self, id: &str, status: Status) -> String {
        format!(
            "✓ {} is now {}",
            id,
            paint(status.label(), Self::status_color(status), true, self.use_color)
        )
    }

    fn format_user(&self, _action: &'static str, user: Option<&User>) -> String {
        match user {
            Some(user) => format!("Signed in as {}", user.email),
            None => "Not signed in.".to_string(),
        }
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        format!("✓ {}", message)
    }

    fn format_error(&self, error: &AppError) -> String {
        format!(
            "{}{}",
            paint("Error: ", Color::Red, true, self.use_color),
            error.user_message()
        )
    }
}

/// Plain text output formatter.
///
/// Formats issues as simple tab-separated text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", issue.id));
        output.push_str(&format!("{}\n", issue.title));
        output.push_str(&format!("{}\n", issue.status));
        output.push_str(&format!("{}\n", issue.priority));
        output.push_str(&format!("{}\n", issue.created_by));
        output.push_str(&format!("{}\n", issue.description));

        output
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut output = String::new();
        for issue in issues {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                issue.id, issue.status, issue.priority, issue.title
            ));
        }
        output
    }

    fn format_created(&self, issue: &Issue) -> String {
        issue.id.clone()
    }

    fn format_matches(&self, _action: &'static str, matches: &[SimilarityMatch]) -> String {
        let mut output = String::new();
        for found in matches {
            output.push_str(&format!(
                "{:.2}\t{}\t{}\n",
                found.score, found.issue.id, found.issue.title
            ));
        }
        output
    }

    fn format_status_change(&self, id: &str, status: Status) -> String {
        format!("{}\t{}", id, status)
    }

    fn format_user(&self, _action: &'static str, user: Option<&User>) -> String {
        user.map(|user| user.email.clone()).unwrap_or_default()
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error.user_message())
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
