//! Rendering ranked tuples back into output lines.
//!
//! Every field, the last one included, is followed by `", "`. Malformed
//! tuples render as the bare identifier plus one delimiter.

use crate::error::RankResult;
use crate::rank::{Cell, RankedTuple, rank_tuples};
use crate::tuple::{Tuple, parse_tuple};
use crate::validation::{classify, validate_row_ids};
use std::fmt::Write as _;
use tracing::warn;

/// Output field terminator.
pub const DELIMITER: &str = ", ";

/// The rendered output lines of one row, one per file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub lines: Vec<String>,
    /// File indices whose tuple was malformed in this row.
    pub malformed: Vec<usize>,
    /// Placeholder columns of this row (blank reference value).
    pub blank_columns: usize,
}

impl RankedRow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Render one ranked tuple.
#[must_use]
pub fn render_tuple(tuple: &RankedTuple) -> String {
    let mut line = String::new();
    match tuple {
        RankedTuple::WellFormed { query_id, cells } => {
            line.push_str(query_id);
            line.push_str(DELIMITER);
            for cell in cells {
                let _ = write!(line, "{}{}", cell, DELIMITER);
            }
        }
        RankedTuple::Malformed { query_id } => {
            line.push_str(query_id);
            line.push_str(DELIMITER);
        }
    }
    line
}

/// Run the per-row pipeline over one row set of raw lines.
///
/// Validates identifiers, classifies tuples against `expected_columns`,
/// ranks with `total_files` as the rank basis and renders one line per file.
/// `row` is the 1-based line number, used in error messages only.
///
/// # Errors
/// Fails on an identifier mismatch or a non-numeric ranked field.
pub fn process_rows<S: AsRef<str>>(
    lines: &[S],
    expected_columns: usize,
    total_files: usize,
    row: usize,
) -> RankResult<RankedRow> {
    let tuples: Vec<Tuple> = lines.iter().map(|l| parse_tuple(l.as_ref())).collect();
    validate_row_ids(&tuples, row)?;

    let well_formed = classify(&tuples, expected_columns);
    if well_formed.is_empty() && !tuples.is_empty() {
        warn!(row, query = tuples[0].query_id(), "no well-formed tuple in row");
    }
    let ranked = rank_tuples(&tuples, &well_formed, expected_columns, total_files)?;
    let blank_columns = ranked
        .iter()
        .find_map(|t| match t {
            RankedTuple::WellFormed { cells, .. } => {
                Some(cells.iter().filter(|c| **c == Cell::Blank).count())
            }
            RankedTuple::Malformed { .. } => None,
        })
        .unwrap_or(0);

    Ok(RankedRow {
        lines: ranked.iter().map(render_tuple).collect(),
        malformed: (0..tuples.len())
            .filter(|&i| !well_formed.contains(i))
            .collect(),
        blank_columns,
    })
}

/// Rank a standalone row set, using its size as the rank basis.
///
/// ```
/// use rankbench::rank_line_set;
///
/// let out = rank_line_set(&["1, 1, 3.0", "1, 2, 1.1"], 3).unwrap();
/// assert_eq!(out, vec!["1, 1, 0, ", "1, 0, 1, "]);
/// ```
///
/// # Errors
/// See [`process_rows`].
pub fn rank_line_set<S: AsRef<str>>(lines: &[S], expected_columns: usize) -> RankResult<Vec<String>> {
    process_rows(lines, expected_columns, lines.len(), 1).map(|row| row.lines)
}
