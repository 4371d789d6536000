// Rust guideline compliant 2026-10-19

//! Implementation of the `brd create` command.
//!
//! Validates the input, runs the duplicate check against recent issues and
//! stores the issue when nothing similar turns up (or `--force` is given).

use crate::OutputFormatter;
use board_app::{parse_priority, require_user, CreateOutcome, RepoContext, Result};
use board_core::IssueInput;
use std::path::Path;

/// Arguments for `brd create`.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Issue title.
    pub title: String,
    /// Issue description.
    pub description: Option<String>,
    /// Priority name; the configured default when absent.
    pub priority: Option<String>,
    /// Optional assignee.
    pub assign: Option<String>,
    /// Skip the duplicate check.
    pub force: bool,
}

/// Creates a new issue as the signed-in user.
///
/// # Returns
///
/// The created issue, or the likely duplicates when creation was held back.
///
/// # Errors
///
/// Returns an error if:
/// - The board is not initialized
/// - No user is signed in
/// - The title or description is blank, or the description is too long
/// - The store cannot be read or written
pub fn execute(root: &Path, args: CreateArgs, formatter: &dyn OutputFormatter) -> Result<String> {
    let context = RepoContext::discover(Some(root))?;
    let user = require_user(&context.open_user_store())?;
    let config = context.load_config()?;

    let priority = match args.priority.as_deref() {
        Some(value) => parse_priority(value)?,
        None => config.default_priority,
    };

    let mut input = IssueInput::new(args.title, args.description.unwrap_or_default(), user.email);
    input.priority = priority;
    input.assigned_to = args.assign;

    let board = context.open_board()?;
    match board.create_issue(input, args.force)? {
        CreateOutcome::Created { id } => {
            let issue = board.get(&id)?;
            Ok(formatter.format_created(&issue))
        }
        CreateOutcome::PossibleDuplicates { matches } => {
            Ok(formatter.format_matches("create", &matches))
        }
    }
}
