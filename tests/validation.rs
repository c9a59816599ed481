//! Tests for row identity checks and tuple classification.

use rankbench::tuple::{Tuple, parse_tuple};
use rankbench::validation::*;
use rankbench::RankError;

fn tuples(lines: &[&str]) -> Vec<Tuple> {
    lines.iter().map(|l| parse_tuple(l)).collect()
}

#[test]
fn matching_ids_pass_after_trimming() {
    let row = tuples(&["q1, 1", "  q1, 2", "q1 , ERROR, x"]);
    assert!(validate_row_ids(&row, 1).is_ok());
}

#[test]
fn mismatch_reports_both_ids() {
    let row = tuples(&["q1, 1", "q1, 2", "q9, 3"]);
    match validate_row_ids(&row, 4) {
        Err(RankError::InconsistentQueryIds {
            row,
            expected,
            found,
        }) => {
            assert_eq!(row, 4);
            assert_eq!(expected, "q1");
            assert_eq!(found, "q9");
        }
        other => panic!("expected id mismatch, got {other:?}"),
    }
}

#[test]
fn empty_row_set_is_valid() {
    assert!(validate_row_ids(&[], 1).is_ok());
}

#[test]
fn classify_by_exact_field_count() {
    let row = tuples(&["q, 1, 2", "q, 1", "q, 1, 2, 3", "q, , "]);
    let wf = classify(&row, 3);
    assert_eq!(wf.iter().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(wf.first(), Some(0));
    assert_eq!(wf.len(), 2);
    assert!(wf.contains(3));
    assert!(!wf.contains(1));
}

#[test]
fn classify_can_find_nothing() {
    let row = tuples(&["q", "q, ERROR"]);
    let wf = classify(&row, 5);
    assert!(wf.is_empty());
    assert_eq!(wf.first(), None);
}
