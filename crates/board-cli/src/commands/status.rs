// Rust guideline compliant 2026-10-19

//! Implementation of the `brd status` command.
//!
//! Moves an issue along Open → In Progress → Done. Rejected moves leave the
//! stored issue untouched.

use crate::OutputFormatter;
use board_app::{parse_status, require_user, RepoContext, Result};
use std::path::Path;

/// Changes the status of an issue as the signed-in user.
///
/// # Errors
///
/// Returns an error if:
/// - The board is not initialized or no user is signed in
/// - The status name or ID is invalid
/// - The workflow does not allow the move
/// - The store cannot be read or written
pub fn execute(
    root: &Path,
    id: &str,
    status: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let context = RepoContext::discover(Some(root))?;
    let user = require_user(&context.open_user_store())?;
    let next = parse_status(status)?;

    let board = context.open_board()?;
    let full_id = board.resolve_id(id)?;
    let status = board.update_status(&full_id, next)?;
    tracing::info!(id = %full_id, status = %status, user = %user.email, "status changed");
    Ok(formatter.format_status_change(&full_id, status))
}
