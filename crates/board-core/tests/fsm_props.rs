// Rust guideline compliant 2026-10-19

//! Property-based tests for the FSM module.

use board_core::{validate_stored_transition, validate_transition, Status, TransitionRejected};
use proptest::prelude::*;

/// Generates arbitrary Status values.
fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Open),
        Just(Status::InProgress),
        Just(Status::Done),
    ]
}

proptest! {
    /// A transition succeeds exactly when the target is in the current
    /// status's edge list.
    #[test]
    fn prop_ok_iff_in_edge_table(current in arb_status(), requested in arb_status()) {
        prop_assert_eq!(
            validate_transition(current, requested).is_ok(),
            current.allowed_next().contains(&requested)
        );
    }

    /// The specific reason is reserved for Open → Done.
    #[test]
    fn prop_specific_reason_only_for_open_to_done(
        current in arb_status(),
        requested in arb_status(),
    ) {
        if let Err(reason) = validate_transition(current, requested) {
            let skip = current == Status::Open && requested == Status::Done;
            prop_assert_eq!(reason == TransitionRejected::SkipsInProgress, skip);
        }
    }

    /// Known stored statuses validate exactly like typed ones.
    #[test]
    fn prop_stored_matches_typed(current in arb_status(), requested in arb_status()) {
        prop_assert_eq!(
            validate_stored_transition(Some(current), requested),
            validate_transition(current, requested)
        );
    }

    /// Walking any sequence of accepted transitions never leaves Done.
    #[test]
    fn prop_done_absorbs(path in prop::collection::vec(arb_status(), 0..20)) {
        let mut status = Status::Open;
        let mut reached_done = false;
        for next in path {
            if validate_transition(status, next).is_ok() {
                status = next;
            }
            if status == Status::Done {
                reached_done = true;
            }
            if reached_done {
                prop_assert_eq!(status, Status::Done);
            }
        }
    }
}
