// Rust guideline compliant 2026-10-19

//! Implementation of the `brd show` command.
//!
//! Displays one issue, resolving a unique ID prefix to the full ID.

use crate::OutputFormatter;
use board_app::{RepoContext, Result};
use std::path::Path;

/// Shows details of an issue by full or partial ID.
///
/// # Errors
///
/// Returns an error if the board is missing, or the ID is unknown or
/// ambiguous.
pub fn execute(root: &Path, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let board = RepoContext::discover(Some(root))?.open_board()?;
    let full_id = board.resolve_id(id)?;
    let issue = board.get(&full_id)?;
    Ok(formatter.format_issue(&issue))
}
