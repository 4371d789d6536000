// Rust guideline compliant 2026-10-19

//! Property-based tests for the similarity engine and duplicate check.

use board_core::{
    find_similar_issues, similarity_score, tokenize, InMemoryIssueStore, Issue, IssueInput,
    DUPLICATE_THRESHOLD,
};
use proptest::prelude::*;

/// Free text mixing words, punctuation and odd whitespace.
fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?\\-\t\n]{0,80}"
}

/// Text that is already normalized: lower-case alphanumeric tokens of 4+ chars.
fn arb_normalized() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{4,10}", 0..10).prop_map(|tokens| tokens.join(" "))
}

fn arb_issue_texts() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            "[a-z]{4,8}( [a-z]{4,8}){0,3}",
            "[a-z]{4,8}( [a-z]{4,8}){0,5}",
        ),
        0..15,
    )
}

proptest! {
    #[test]
    fn prop_tokenize_idempotent_on_normalized_input(text in arb_normalized()) {
        let once = tokenize(&text);
        let twice = tokenize(&once.join(" "));
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.join(" "), text);
    }

    #[test]
    fn prop_tokens_are_normalized(text in arb_text()) {
        for token in tokenize(&text) {
            prop_assert!(token.len() >= 4);
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn prop_score_in_unit_interval(a in arb_text(), b in arb_text()) {
        let score = similarity_score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_score_symmetric(a in arb_text(), b in arb_text()) {
        prop_assert_eq!(similarity_score(&a, &b), similarity_score(&b, &a));
    }

    #[test]
    fn prop_self_similarity(text in arb_text()) {
        let score = similarity_score(&text, &text);
        if tokenize(&text).is_empty() {
            prop_assert_eq!(score, 0.0);
        } else {
            prop_assert_eq!(score, 1.0);
        }
    }

    #[test]
    fn prop_duplicates_above_threshold_and_sorted(
        existing in arb_issue_texts(),
        title in "[a-z]{4,8}( [a-z]{4,8}){0,3}",
        description in "[a-z]{4,8}( [a-z]{4,8}){0,5}",
    ) {
        let issues: Vec<Issue> = existing
            .into_iter()
            .enumerate()
            .map(|(i, (t, d))| {
                Issue::from_input(
                    format!("iss-{:06x}", i),
                    IssueInput::new(t, d, "prop@example.com"),
                    i as i64,
                )
            })
            .collect();
        let store = InMemoryIssueStore::with_issues(issues);

        let matches = find_similar_issues(&store, &title, &description, 200).unwrap();
        for m in &matches {
            prop_assert!(m.score >= DUPLICATE_THRESHOLD);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn test_empty_strings_score_zero() {
    assert_eq!(similarity_score("", ""), 0.0);
}
