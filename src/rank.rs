//! Tie-aware competition ranking of one row across files.
//!
//! For every numeric column the well-formed tuples of a row are sorted by
//! value, ascending. The smallest value gets the top label `N - 1`, where `N`
//! is the total number of files in the run (not the number of well-formed
//! tuples of this row, so labels stay on one scale across rows). Each further
//! position consumes one label; tied values share the label of the first
//! member of their group, so `N = 4` with values `1, 2, 2, 3` yields labels
//! `3, 2, 2, 0`.
//!
//! A column whose reference value (the value in the first well-formed tuple)
//! is blank is a placeholder column: all well-formed tuples get a blank
//! field there.

use crate::error::{RankError, RankResult};
use crate::tuple::Tuple;
use crate::validation::WellFormedIndex;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// One cell of a ranked tuple, for columns `1..expected_columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Placeholder column (blank reference value).
    Blank,
    /// Competition rank label in `[0, N - 1]`.
    Rank(usize),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Rank(label) => write!(f, "{}", label),
        }
    }
}

/// Per-file ranking result for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankedTuple {
    WellFormed { query_id: String, cells: Vec<Cell> },
    Malformed { query_id: String },
}

impl RankedTuple {
    #[must_use]
    pub fn query_id(&self) -> &str {
        match self {
            RankedTuple::WellFormed { query_id, .. } | RankedTuple::Malformed { query_id } => {
                query_id
            }
        }
    }

    /// Rank labels of this tuple, in column order. Empty for malformed tuples.
    pub fn labels(&self) -> impl Iterator<Item = usize> + '_ {
        let cells: &[Cell] = match self {
            RankedTuple::WellFormed { cells, .. } => cells,
            RankedTuple::Malformed { .. } => &[],
        };
        cells.iter().filter_map(|c| match c {
            Cell::Rank(label) => Some(*label),
            Cell::Blank => None,
        })
    }
}

/// A parsed value of one column tagged with the file it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedValue {
    pub index: usize,
    pub value: OrderedFloat<f64>,
}

impl IndexedValue {
    #[must_use]
    pub fn new(index: usize, value: f64) -> Self {
        Self {
            index,
            value: OrderedFloat(value),
        }
    }

    /// Ascending by value; file index is irrelevant.
    #[must_use]
    pub fn by_value(a: &Self, b: &Self) -> Ordering {
        a.value.cmp(&b.value)
    }
}

/// Assign competition labels to a column's values.
///
/// `ordering` decides the ranking direction: the first element after sorting
/// receives `total_files - 1`. Returns `(file index, label)` pairs in sorted
/// order.
pub fn competition_labels<F>(
    mut values: Vec<IndexedValue>,
    total_files: usize,
    ordering: F,
) -> Vec<(usize, usize)>
where
    F: FnMut(&IndexedValue, &IndexedValue) -> Ordering,
{
    values.sort_by(ordering);
    let highest_rank = total_files.saturating_sub(1);

    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<(OrderedFloat<f64>, usize)> = None;
    for (pos, v) in values.iter().enumerate() {
        let label = match previous {
            Some((value, label)) if value == v.value => label,
            _ => highest_rank.saturating_sub(pos),
        };
        previous = Some((v.value, label));
        out.push((v.index, label));
    }
    out
}

/// Parse a measurement as `f64`.
///
/// Decimal and exponent notation are accepted. The only non-finite spellings
/// are `NaN` and `Infinity` (optionally signed), matched case-sensitively;
/// `inf`, `nan`, `INFINITY` and friends are rejected.
#[must_use]
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let body = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let special = matches!(body, "NaN" | "Infinity");
    if !special && body.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return None;
    }
    raw.parse().ok()
}

fn parse_value(tuples: &[Tuple], i: usize, column: usize) -> RankResult<IndexedValue> {
    let t = &tuples[i];
    let raw = t.field(column).unwrap_or_default();
    parse_measurement(raw)
        .map(|v| IndexedValue::new(i, v))
        .ok_or_else(|| RankError::InvalidNumber {
            query_id: t.query_id().to_owned(),
            file: i + 1,
            column,
            value: raw.to_owned(),
        })
}

/// Rank every column of one row set.
///
/// Returns one [`RankedTuple`] per input tuple, in file order. `total_files`
/// is the rank basis `N`.
///
/// # Errors
/// Returns [`RankError::InvalidNumber`] if a ranked column of a well-formed
/// tuple does not parse as a number.
pub fn rank_tuples(
    tuples: &[Tuple],
    well_formed: &WellFormedIndex,
    expected_columns: usize,
    total_files: usize,
) -> RankResult<Vec<RankedTuple>> {
    let mut cells: Vec<Vec<Cell>> = tuples
        .iter()
        .map(|_| Vec::with_capacity(expected_columns.saturating_sub(1)))
        .collect();

    if let Some(reference) = well_formed.first() {
        for column in 1..expected_columns {
            let ref_value = tuples[reference].field(column).unwrap_or_default();
            if ref_value.is_empty() {
                debug!(column, query = tuples[reference].query_id(), "blank column");
                for i in well_formed.iter() {
                    cells[i].push(Cell::Blank);
                }
                continue;
            }

            let values = well_formed
                .iter()
                .map(|i| parse_value(tuples, i, column))
                .collect::<RankResult<Vec<_>>>()?;

            for (i, label) in competition_labels(values, total_files, IndexedValue::by_value) {
                cells[i].push(Cell::Rank(label));
            }
        }
    }

    Ok(tuples
        .iter()
        .zip(cells)
        .enumerate()
        .map(|(i, (t, cells))| {
            let query_id = t.query_id().to_owned();
            if well_formed.contains(i) {
                RankedTuple::WellFormed { query_id, cells }
            } else {
                RankedTuple::Malformed { query_id }
            }
        })
        .collect())
}
