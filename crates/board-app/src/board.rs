// Rust guideline compliant 2026-10-19

//! The issue board service.
//!
//! [`IssueBoard`] ties the pure core pieces to an issue store: creation runs
//! the duplicate check first unless the caller overrides it, and status
//! changes are validated before the store is touched.

use crate::error::Result;
use crate::list::{filter_issues, ListOptions};
use board_core::{
    find_similar_issues, validate_stored_transition, Issue, IssueId, IssueInput, IssueStore,
    SimilarityMatch, Status, DEFAULT_WINDOW,
};
use serde::Serialize;

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CreateOutcome {
    /// The issue was stored.
    Created {
        /// ID assigned by the store.
        id: IssueId,
    },
    /// Nothing was stored; the caller should confirm or abandon.
    PossibleDuplicates {
        /// Ranked likely duplicates.
        matches: Vec<SimilarityMatch>,
    },
}

/// Issue board operations over a single issue store.
#[derive(Debug)]
pub struct IssueBoard<S> {
    store: S,
    duplicate_window: usize,
}

impl<S: IssueStore> IssueBoard<S> {
    /// Creates a board with the default duplicate-check window.
    pub fn new(store: S) -> Self {
        Self::with_window(store, DEFAULT_WINDOW)
    }

    /// Creates a board comparing against `duplicate_window` recent issues.
    pub fn with_window(store: S, duplicate_window: usize) -> Self {
        Self {
            store,
            duplicate_window,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the duplicate-check window.
    #[must_use]
    pub fn duplicate_window(&self) -> usize {
        self.duplicate_window
    }

    /// Ranks recent issues that look like the candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn find_similar(&self, title: &str, description: &str) -> Result<Vec<SimilarityMatch>> {
        Ok(find_similar_issues(
            &self.store,
            title,
            description,
            self.duplicate_window,
        )?)
    }

    /// Creates an issue, checking for duplicates first.
    ///
    /// Input is validated before any store call. Unless
    /// `skip_duplicate_check` is set, likely duplicates are returned instead
    /// of creating the issue; the caller re-submits with the flag set to
    /// confirm.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, or an error if the store
    /// cannot be read or written.
    pub fn create_issue(
        &self,
        input: IssueInput,
        skip_duplicate_check: bool,
    ) -> Result<CreateOutcome> {
        let input = input.normalized();
        input.validate()?;

        if !skip_duplicate_check {
            let matches = self.find_similar(&input.title, &input.description)?;
            if !matches.is_empty() {
                tracing::info!(matches = matches.len(), "possible duplicates found");
                return Ok(CreateOutcome::PossibleDuplicates { matches });
            }
        }

        let id = self.store.create(input)?;
        Ok(CreateOutcome::Created { id })
    }

    /// Moves an issue to a new status.
    ///
    /// The transition is validated against the stored status before the
    /// update is issued.
    ///
    /// # Returns
    ///
    /// The new status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown IDs, a transition rejection for moves
    /// outside the workflow, or an error if the store fails.
    pub fn update_status(&self, id: &str, next: Status) -> Result<Status> {
        let current = self.store.stored_status(id)?;
        validate_stored_transition(current, next).map_err(board_core::Error::from)?;
        self.store.update_status(id, next)?;
        Ok(next)
    }

    /// Loads a single issue by full ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown IDs.
    pub fn get(&self, id: &str) -> Result<Issue> {
        Ok(self.store.get(id)?)
    }

    /// Resolves a partial ID to a full one.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is unknown or ambiguous.
    pub fn resolve_id(&self, partial: &str) -> Result<IssueId> {
        crate::ids::resolve_issue_id(partial, &self.store)
    }

    /// Lists issues newest first, applying filters after the fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list(&self, options: &ListOptions) -> Result<Vec<Issue>> {
        let issues = self.store.list_recent(options.limit)?;
        Ok(filter_issues(issues, options))
    }
}
