// Rust guideline compliant 2026-10-19

//! Implementation of the `brd list` command.

use crate::OutputFormatter;
use board_app::{parse_priority, parse_status, ListOptions, RepoContext, Result};
use std::path::Path;

/// Lists issues newest first.
///
/// Filters are applied after the `limit` most recent issues are read.
///
/// # Errors
///
/// Returns an error if the board is missing, a filter value is invalid, or
/// the store cannot be read.
pub fn execute(
    root: &Path,
    status: Option<String>,
    priority: Option<String>,
    assigned_to: Option<String>,
    created_by: Option<String>,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let options = ListOptions {
        status: status.as_deref().map(parse_status).transpose()?,
        priority: priority.as_deref().map(parse_priority).transpose()?,
        assigned_to,
        created_by,
        limit,
    };

    let board = RepoContext::discover(Some(root))?.open_board()?;
    let issues = board.list(&options)?;
    Ok(formatter.format_list(&issues))
}
