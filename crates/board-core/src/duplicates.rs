// Rust guideline compliant 2026-10-19

//! Duplicate detection against recent issues.
//!
//! The check is advisory: it never writes to the store and never blocks a
//! creation on its own. Callers show the matches and decide.

use crate::similarity::{issue_corpus, jaccard, tokenize};
use crate::store::IssueStore;
use crate::{Issue, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Matches scoring below this are treated as coincidental overlap.
pub const DUPLICATE_THRESHOLD: f64 = 0.25;

/// Number of recent issues compared by default.
pub const DEFAULT_WINDOW: usize = 200;

/// An existing issue paired with its similarity to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatch {
    /// The existing issue.
    pub issue: Issue,
    /// Jaccard score in `[0, 1]`; higher means more shared words.
    pub score: f64,
}

/// Finds recent issues that look like the candidate.
///
/// Fetches the `window` most recent issues, scores each one's title and
/// description against the candidate's, keeps scores of at least
/// [`DUPLICATE_THRESHOLD`] and sorts them by score, highest first. Equal
/// scores keep the store's newest-first order.
///
/// # Arguments
///
/// * `store` - Issue store to read the window from
/// * `title` - Candidate title
/// * `description` - Candidate description
/// * `window` - How many recent issues to compare against
///
/// # Returns
///
/// Ranked matches; empty when nothing clears the threshold.
///
/// # Errors
///
/// Returns an error only if the store cannot be read.
pub fn find_similar_issues<S>(
    store: &S,
    title: &str,
    description: &str,
    window: usize,
) -> Result<Vec<SimilarityMatch>>
where
    S: IssueStore + ?Sized,
{
    let recent = store.list_recent(Some(window))?;
    let candidate: HashSet<String> = tokenize(&format!("{} {}", title, description))
        .into_iter()
        .collect();

    let scanned = recent.len();
    let mut matches: Vec<SimilarityMatch> = recent
        .into_iter()
        .filter_map(|issue| {
            let tokens: HashSet<String> = tokenize(&issue_corpus(&issue)).into_iter().collect();
            let score = jaccard(&candidate, &tokens);
            (score >= DUPLICATE_THRESHOLD).then_some(SimilarityMatch { issue, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(window, scanned, matches = matches.len(), "duplicate check finished");
    Ok(matches)
}
