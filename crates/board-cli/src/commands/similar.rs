// Rust guideline compliant 2026-10-19

//! Implementation of the `brd similar` command.
//!
//! Runs the duplicate check for a candidate without creating anything.

use crate::OutputFormatter;
use board_app::{RepoContext, Result};
use std::path::Path;

/// Ranks recent issues that look like the given title and description.
///
/// # Errors
///
/// Returns an error if the board is missing or the store cannot be read.
pub fn execute(
    root: &Path,
    title: &str,
    description: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let board = RepoContext::discover(Some(root))?.open_board()?;
    let matches = board.find_similar(title, description)?;
    Ok(formatter.format_matches("similar", &matches))
}
