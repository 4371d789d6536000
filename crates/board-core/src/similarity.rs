// Rust guideline compliant 2026-10-19

//! Text similarity engine.
//!
//! Free text is reduced to lower-case alphanumeric tokens of at least four
//! characters, and two texts are compared by the Jaccard index of their
//! token sets. Both functions are pure.

use crate::Issue;
use std::collections::HashSet;

/// Tokens of this many characters or fewer are dropped.
const MIN_TOKEN_EXCLUSIVE: usize = 3;

/// Splits free text into comparable tokens.
///
/// The text is lower-cased, every character outside `[a-z0-9]` and
/// whitespace becomes a space, and the result is split on whitespace runs.
/// Tokens shorter than four characters are discarded. Duplicates are kept.
///
/// # Arguments
///
/// * `text` - Free text to tokenize
///
/// # Returns
///
/// Tokens in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > MIN_TOKEN_EXCLUSIVE)
        .map(str::to_string)
        .collect()
}

/// Scores the token overlap of two texts.
///
/// Returns the Jaccard index `|A ∩ B| / |A ∪ B|` of the two token sets. When
/// both sets are empty the union counts as 1, so the score is 0.
///
/// # Arguments
///
/// * `text_a` - First text
/// * `text_b` - Second text
///
/// # Returns
///
/// A score in `[0, 1]`.
pub fn similarity_score(text_a: &str, text_b: &str) -> f64 {
    let set_a: HashSet<String> = tokenize(text_a).into_iter().collect();
    let set_b: HashSet<String> = tokenize(text_b).into_iter().collect();
    jaccard(&set_a, &set_b)
}

pub(crate) fn jaccard(set_a: &HashSet<String>, set_b: &HashSet<String>) -> f64 {
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.union(set_b).count().max(1);
    intersection as f64 / union as f64
}

/// Builds the comparison text for a stored issue.
pub fn issue_corpus(issue: &Issue) -> String {
    format!("{} {}", issue.title, issue.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation_without_merging_words() {
        assert_eq!(
            tokenize("Login-button broken!!! (again)"),
            vec!["login", "button", "broken", "again"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("a is the bug fix"), Vec::<String>::new());
        assert_eq!(tokenize("the bugs"), vec!["bugs"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_digits() {
        assert_eq!(
            tokenize("Error 5000 error 5000"),
            vec!["error", "5000", "error", "5000"]
        );
    }

    #[test]
    fn test_tokenize_non_ascii_letters_become_separators() {
        assert_eq!(tokenize("café crash"), vec!["crash"]);
        assert_eq!(tokenize("naïveté"), Vec::<String>::new());
    }

    #[test]
    fn test_score_empty_inputs_is_zero() {
        assert_eq!(similarity_score("", ""), 0.0);
        assert_eq!(similarity_score("a b c", "the"), 0.0);
    }

    #[test]
    fn test_score_identical_is_one() {
        assert_eq!(similarity_score("Crash on startup", "crash ON startup!"), 1.0);
    }

    #[test]
    fn test_score_disjoint_is_zero() {
        assert_eq!(similarity_score("login page", "export report"), 0.0);
    }

    #[test]
    fn test_score_ignores_repetition() {
        assert_eq!(
            similarity_score("crash crash crash startup", "startup crash"),
            1.0
        );
    }

    #[test]
    fn test_login_safari_scenario() {
        let candidate = "Login button broken Clicking login does nothing on Safari";
        let existing = "Login button not working Login click has no effect in Safari browser";
        let score = similarity_score(candidate, existing);
        assert!((score - 3.0 / 11.0).abs() < 1e-12);
        assert!(score >= 0.25);
    }
}
