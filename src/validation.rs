//! Row identity checks and well-formed/malformed classification.
//!
//! A row set is the N tuples read at the same position from N files. Two
//! things are checked for every row set:
//! - **Identity** - every tuple must carry the same query identifier as the
//!   tuple from file 0. A mismatch means the inputs are out of step, which is
//!   fatal ([`RankError::InconsistentQueryIds`]).
//! - **Shape** - a tuple is well-formed iff its field count equals the
//!   expected column count of the run. Malformed tuples are not errors; they
//!   degrade to identifier-only output for that row.

use crate::error::{RankError, RankResult};
use crate::tuple::Tuple;
use tracing::debug;

/// Check that every tuple of a row shares file 0's query identifier.
///
/// `row` is the 1-based line number used in the error message.
///
/// # Errors
/// Returns [`RankError::InconsistentQueryIds`] on the first mismatch.
pub fn validate_row_ids(tuples: &[Tuple], row: usize) -> RankResult<()> {
    let Some((first, rest)) = tuples.split_first() else {
        return Ok(());
    };
    let expected = first.query_id();
    for t in rest {
        if t.query_id() != expected {
            return Err(RankError::InconsistentQueryIds {
                row,
                expected: expected.to_owned(),
                found: t.query_id().to_owned(),
            });
        }
    }
    Ok(())
}

/// File indices (within one row set) whose tuple is well-formed, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellFormedIndex {
    indices: Vec<usize>,
}

impl WellFormedIndex {
    /// Whether no tuple of the row is well-formed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether file `i` is well-formed for this row.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        self.indices.binary_search(&i).is_ok()
    }

    /// The first well-formed file index, which provides reference values.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Partition a row set into well-formed and malformed tuples.
#[must_use]
pub fn classify(tuples: &[Tuple], expected_columns: usize) -> WellFormedIndex {
    let indices = tuples
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            if t.len() == expected_columns {
                Some(i)
            } else {
                debug!(
                    file = i + 1,
                    query = t.query_id(),
                    fields = t.len(),
                    expected = expected_columns,
                    "malformed tuple"
                );
                None
            }
        })
        .collect();
    WellFormedIndex { indices }
}
