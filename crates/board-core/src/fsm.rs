// Rust guideline compliant 2026-10-19

//! Finite State Machine module for status transitions.
//!
//! The board workflow allows exactly these transitions:
//!
//! - Open → In Progress
//! - In Progress → Open
//! - In Progress → Done
//!
//! Done is terminal. Open → Done is rejected with its own reason because
//! work has to be started before it can be finished.

use crate::Status;
use serde::Serialize;
use thiserror::Error;

/// Why a status change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum TransitionRejected {
    /// Open → Done without passing through In Progress.
    #[error("You can only move Open issues to In Progress first.")]
    SkipsInProgress,

    /// Any other pair outside the edge table.
    #[error("This status change is not allowed by the board rules.")]
    NotPermitted,
}

impl Status {
    /// Returns the statuses reachable from this one.
    #[must_use]
    pub fn allowed_next(self) -> &'static [Status] {
        match self {
            Status::Open => &[Status::InProgress],
            Status::InProgress => &[Status::Open, Status::Done],
            Status::Done => &[],
        }
    }

    /// Returns true if this status has no outgoing transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }

    /// Checks whether moving to `target` is allowed.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if `target` is not in the edge table.
    pub fn can_transition_to(self, target: Status) -> Result<(), TransitionRejected> {
        validate_transition(self, target)
    }
}

/// Validates a status transition.
///
/// # Arguments
///
/// * `current` - Status the issue is in now
/// * `requested` - Status the caller wants
///
/// # Errors
///
/// Returns [`TransitionRejected::SkipsInProgress`] for Open → Done and
/// [`TransitionRejected::NotPermitted`] for every other pair outside the
/// edge table, including identity transitions.
pub fn validate_transition(current: Status, requested: Status) -> Result<(), TransitionRejected> {
    validate_stored_transition(Some(current), requested)
}

/// Validates a transition from a status as read from a store.
///
/// `None` stands for a stored label that is not a known status. Such an
/// issue has no outgoing edges, so every request is rejected.
///
/// # Errors
///
/// Same as [`validate_transition`]; unknown current statuses always yield
/// [`TransitionRejected::NotPermitted`].
pub fn validate_stored_transition(
    current: Option<Status>,
    requested: Status,
) -> Result<(), TransitionRejected> {
    let allowed = current.map(Status::allowed_next).unwrap_or(&[]);
    if allowed.contains(&requested) {
        return Ok(());
    }

    if current == Some(Status::Open) && requested == Status::Done {
        Err(TransitionRejected::SkipsInProgress)
    } else {
        Err(TransitionRejected::NotPermitted)
    }
}
