// Rust guideline compliant 2026-10-19

//! Error types for the issue board core library.

use crate::fsm::TransitionRejected;
use thiserror::Error;

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for board operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while talking to a store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller input failed validation before any store call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested status change violates the workflow.
    #[error("Transition rejected: {0}")]
    InvalidTransition(#[from] TransitionRejected),

    /// Issue not found.
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Account or session failure.
    #[error("Authentication failed: {0}")]
    Auth(String),
}
