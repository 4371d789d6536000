// Rust guideline compliant 2026-10-19

//! Implementation of the account commands: `brd signup`, `brd login`,
//! `brd logout` and `brd whoami`.
//!
//! Sessions are local to the board directory.

use crate::OutputFormatter;
use board_app::{AppError, RepoContext, Result};
use board_core::UserStore;
use std::io::BufRead;
use std::path::Path;

/// Creates an account and signs it in.
///
/// # Errors
///
/// Returns an error if the board is missing, the credentials are invalid,
/// or the account already exists.
pub fn signup(
    root: &Path,
    email: &str,
    password: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let users = RepoContext::discover(Some(root))?.open_user_store();
    let password = password_or_stdin(password)?;
    let user = users.sign_up(email, &password)?;
    Ok(formatter.format_user("signup", Some(&user)))
}

/// Signs in with an existing account.
///
/// # Errors
///
/// Returns an error if the board is missing or the credentials do not match.
pub fn login(
    root: &Path,
    email: &str,
    password: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let users = RepoContext::discover(Some(root))?.open_user_store();
    let password = password_or_stdin(password)?;
    let user = users.sign_in(email, &password)?;
    Ok(formatter.format_user("login", Some(&user)))
}

/// Ends the current session. Signing out twice is not an error.
///
/// # Errors
///
/// Returns an error if the board is missing or the session cannot be removed.
pub fn logout(root: &Path, formatter: &dyn OutputFormatter) -> Result<String> {
    let users = RepoContext::discover(Some(root))?.open_user_store();
    users.sign_out()?;
    Ok(formatter.format_message("logout", "Signed out"))
}

/// Shows the signed-in user.
///
/// # Errors
///
/// Returns an error if the board is missing or the session cannot be read.
pub fn whoami(root: &Path, formatter: &dyn OutputFormatter) -> Result<String> {
    let users = RepoContext::discover(Some(root))?.open_user_store();
    let user = users.current_user()?;
    Ok(formatter.format_user("whoami", user.as_ref()))
}

/// Uses the given password or reads one line from stdin.
fn password_or_stdin(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(AppError::InvalidInput(
            "A password is required (pass --password or pipe it on stdin)".to_string(),
        ));
    }
    Ok(password)
}
