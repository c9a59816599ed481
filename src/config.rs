//! Immutable run configuration.

use crate::error::{RankError, RankResult};
use std::path::PathBuf;

/// Column count hard-wired into the legacy measurement format.
pub const LEGACY_COLUMN_COUNT: usize = 73;

/// How the expected column count of a run is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnCount {
    /// Use this many fields, identifier included.
    Fixed(usize),
    /// Use the field count of the first line of file 0.
    #[default]
    FromFirstLine,
}

/// The context shared by every row of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    pub inputs: Vec<PathBuf>,
    pub columns: ColumnCount,
}

impl RankConfig {
    /// # Errors
    /// Returns [`RankError::NoInputs`] when `inputs` is empty.
    pub fn new<I, P>(inputs: I, columns: ColumnCount) -> RankResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let inputs: Vec<PathBuf> = inputs.into_iter().map(Into::into).collect();
        if inputs.is_empty() {
            return Err(RankError::NoInputs);
        }
        Ok(Self { inputs, columns })
    }

    /// The rank basis: total number of files in the run.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.inputs.len()
    }
}
