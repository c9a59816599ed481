//! Tests for run statistics.

use rankbench::{RunStats, process_rows};
use std::time::Duration;

#[test]
fn record_row_counts_malformed_per_file() -> anyhow::Result<()> {
    let mut stats = RunStats::new(3, 3);
    stats.record_row(&process_rows(&["a, 1, ", "a", "a, 2, "], 3, 3, 1)?);
    stats.record_row(&process_rows(&["b", "b", "b, 1"], 3, 3, 2)?);

    assert_eq!(stats.rows, 2);
    assert_eq!(stats.malformed_per_file, vec![1, 2, 1]);
    assert_eq!(stats.malformed_total(), 4);
    assert_eq!(stats.rows_without_ranking, 1);
    assert_eq!(stats.blank_columns, 1);
    Ok(())
}

#[test]
fn elapsed_is_kept_in_milliseconds() {
    let mut stats = RunStats::new(1, 2);
    stats.set_elapsed(Duration::from_micros(2_500));
    assert_eq!(stats.elapsed_ms, 2);
}

#[test]
fn serializes_field_names() -> anyhow::Result<()> {
    let stats = RunStats::new(2, 4);
    let json = serde_json::to_value(&stats)?;
    assert_eq!(json["files"], 2);
    assert_eq!(json["expected_columns"], 4);
    assert_eq!(json["malformed_per_file"], serde_json::json!([0, 0]));
    Ok(())
}
