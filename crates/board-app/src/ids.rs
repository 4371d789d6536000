// Rust guideline compliant 2026-10-19

//! ID resolution helpers for issues.

use crate::error::Result;
use board_core::{identity, IssueId, IssueStore};

/// Resolves a partial issue ID against every ID in the store.
///
/// Records the store cannot fully read still resolve, so later calls can
/// report on them instead of claiming they do not exist.
///
/// # Errors
///
/// Returns an error if the partial ID is empty, ambiguous, or not found,
/// or if the store cannot be read.
pub fn resolve_issue_id<S>(partial: &str, store: &S) -> Result<IssueId>
where
    S: IssueStore + ?Sized,
{
    let ids = store.ids()?;
    Ok(identity::resolve_partial_id(partial, &ids)?)
}
