// Rust guideline compliant 2026-10-19

//! Shared application services for the issue board.
//!
//! This crate provides reusable, non-CLI-specific helpers for repository
//! discovery, the duplicate-aware create flow, validated status changes,
//! list filtering, session checks, and standardized response envelopes.

pub mod board;
pub mod error;
pub mod ids;
pub mod list;
pub mod repo;
pub mod response;
pub mod session;

pub use board::{CreateOutcome, IssueBoard};
pub use error::{AppError, ErrorCode, Result};
pub use ids::resolve_issue_id;
pub use list::{filter_issues, parse_priority, parse_status, ListOptions};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use session::require_user;
