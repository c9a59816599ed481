//! Tests for splitting raw measurement lines into tuples.

use rankbench::rank_line_set;
use rankbench::tuple::{parse_tuple, query_id};

#[test]
fn splits_on_commas_and_trims() {
    let t = parse_tuple("  q12 ,1.5 ,  ,3");
    assert_eq!(t.len(), 4);
    assert_eq!(t.query_id(), "q12");
    assert_eq!(t.fields(), &["q12", "1.5", "", "3"]);
    assert_eq!(t.field(3), Some("3"));
    assert_eq!(t.field(4), None);
}

#[test]
fn trailing_whitespace_field_is_kept() {
    let t = parse_tuple("q, 1, 2, ");
    assert_eq!(t.fields(), &["q", "1", "2", ""]);
}

#[test]
fn trailing_empty_fields_are_dropped() {
    assert_eq!(parse_tuple("q, 1, 2,").fields(), &["q", "1", "2"]);
    assert_eq!(parse_tuple("q, 1,,,").fields(), &["q", "1"]);
    assert_eq!(parse_tuple("q,, 2").fields(), &["q", "", "2"]);
    assert_eq!(parse_tuple(",,").fields(), &[""]);
}

#[test]
fn trailing_comma_does_not_make_tuple_malformed() -> anyhow::Result<()> {
    let result = rank_line_set(&["q, 1, 2,", "q, 3, 4"], 3)?;
    assert_eq!(result, vec!["q, 1, 1, ", "q, 0, 0, "]);
    Ok(())
}

#[test]
fn carriage_return_inside_line_keeps_later_fields() {
    let t = parse_tuple("q, 1\r, 2");
    assert_eq!(t.fields(), &["q", "1", "2"]);
}

#[test]
fn quotes_are_literal() {
    let t = parse_tuple("\"a, b\", 1");
    assert_eq!(t.fields(), &["\"a", "b\"", "1"]);
}

#[test]
fn empty_line_has_empty_identifier() {
    let t = parse_tuple("");
    assert_eq!(t.len(), 1);
    assert_eq!(t.query_id(), "");
}

#[test]
fn line_terminators_are_ignored() {
    assert_eq!(parse_tuple("q, 1\r\n").fields(), &["q", "1"]);
    assert_eq!(query_id(" Q3 , 9"), "Q3");
}
