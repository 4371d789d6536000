// Rust guideline compliant 2026-10-19

//! Issue Board Core Library
//!
//! This crate provides the foundational components for the issue board:
//! - Data models (Issue, IssueInput, Priority, Status)
//! - Similarity engine (tokenization, Jaccard scoring)
//! - Duplicate detection over a bounded window of recent issues
//! - FSM logic (status transitions, rejection reasons)
//! - Issue and user store traits with local file-backed implementations
//! - Hash ID generation and resolution
//! - Configuration and error types

pub mod config;
pub mod duplicates;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod similarity;
pub mod store;
pub mod users;

pub use config::{Config, OutputFormat};
pub use duplicates::{find_similar_issues, SimilarityMatch, DEFAULT_WINDOW, DUPLICATE_THRESHOLD};
pub use error::{Error, Result};
pub use fsm::{validate_stored_transition, validate_transition, TransitionRejected};
pub use models::{Issue, IssueId, IssueInput, Priority, Status};
pub use similarity::{issue_corpus, similarity_score, tokenize};
pub use store::{InMemoryIssueStore, IssueStore, JsonlIssueStore};
pub use users::{LocalUserStore, User, UserStore};
