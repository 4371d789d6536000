// Rust guideline compliant 2026-10-19

//! Session checks for commands that act on behalf of a user.

use crate::error::{AppError, Result};
use board_core::{User, UserStore};

/// Returns the signed-in user or `NotSignedIn`.
///
/// # Errors
///
/// Returns `NotSignedIn` when there is no session, or an error if the
/// session cannot be read.
pub fn require_user<U>(users: &U) -> Result<User>
where
    U: UserStore + ?Sized,
{
    users.current_user()?.ok_or(AppError::NotSignedIn)
}
