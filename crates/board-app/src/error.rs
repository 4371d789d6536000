// Rust guideline compliant 2026-10-19

//! Error handling for issue board application services.

use board_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested issue was not found.
    NotFound,
    /// The provided identifier matched multiple issues.
    AmbiguousId,
    /// The requested status change violates the workflow.
    TransitionRejected,
    /// Input validation failed before any store call.
    ValidationError,
    /// Sign-in or sign-up failed.
    AuthError,
    /// The command needs a signed-in user.
    NotSignedIn,
    /// The store could not be read or written.
    StoreUnavailable,
    /// The board directory has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Board directory is missing or not initialized.
    #[error("Issue board not initialized at {path}. Run 'brd init' first.")]
    RepoNotInitialized {
        /// Path where `.board` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No user is signed in.
    #[error("Please sign in first. Run 'brd login' or 'brd signup'.")]
    NotSignedIn,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotSignedIn => ErrorCode::NotSignedIn,
            AppError::Io(_) => ErrorCode::StoreUnavailable,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::InvalidTransition(_) => ErrorCode::TransitionRejected,
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::Auth(_) => ErrorCode::AuthError,
                CoreError::Io(_) | CoreError::Json(_) => ErrorCode::StoreUnavailable,
            },
        }
    }

    /// Returns the message shown to users.
    ///
    /// Store failures get a generic retry hint; everything else uses the
    /// error's own text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::Core(CoreError::InvalidTransition(reason)) => reason.to_string(),
            _ if self.code() == ErrorCode::StoreUnavailable => {
                format!("The issue store is unavailable ({}). Please try again.", self)
            }
            _ => self.to_string(),
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            AppError::Core(CoreError::InvalidTransition(reason)) => {
                serde_json::to_value(reason).ok()
            }
            _ => None,
        }
    }
}
