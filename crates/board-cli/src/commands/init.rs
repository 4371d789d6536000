// Rust guideline compliant 2026-10-19

//! Implementation of the `brd init` command.
//!
//! Creates the `.board` directory with an empty issues file and a default
//! configuration.

use crate::OutputFormatter;
use board_app::{RepoContext, Result};
use std::path::Path;

/// Initializes an issue board under `root`.
///
/// Existing files are left untouched, so running it twice is harmless.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(root: &Path, formatter: &dyn OutputFormatter) -> Result<String> {
    let (context, created) = RepoContext::init(Some(root))?;
    let message = if created {
        format!("Issue board initialized at {}", context.board_dir().display())
    } else {
        format!("Issue board already initialized at {}", context.board_dir().display())
    };
    Ok(formatter.format_message("init", &message))
}
