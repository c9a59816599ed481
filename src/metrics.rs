//! Run statistics.
//!
//! [`RunStats`] is filled in row by row by the runner and can be logged or
//! saved as JSON once the run has finished.

use crate::render::RankedRow;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Counters collected over one ranking run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of input files (the rank basis).
    pub files: usize,
    /// Expected field count per tuple, identifier included.
    pub expected_columns: usize,
    /// Rows written to every output file.
    pub rows: usize,
    /// Malformed tuples, indexed by file.
    pub malformed_per_file: Vec<usize>,
    /// Rows in which no file had a well-formed tuple.
    pub rows_without_ranking: usize,
    /// Row/column cells left blank because the reference value was blank.
    pub blank_columns: usize,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: u64,
}

impl RunStats {
    #[must_use]
    pub fn new(files: usize, expected_columns: usize) -> Self {
        Self {
            files,
            expected_columns,
            malformed_per_file: vec![0; files],
            ..Self::default()
        }
    }

    /// Account for one processed row.
    pub fn record_row(&mut self, row: &RankedRow) {
        self.rows += 1;
        for &i in &row.malformed {
            if let Some(n) = self.malformed_per_file.get_mut(i) {
                *n += 1;
            }
        }
        if !row.is_empty() && row.malformed.len() == row.len() {
            self.rows_without_ranking += 1;
        }
        self.blank_columns += row.blank_columns;
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    }

    /// Total malformed tuples across all files.
    #[must_use]
    pub fn malformed_total(&self) -> usize {
        self.malformed_per_file.iter().sum()
    }

    /// Emit a one-line summary at info level.
    pub fn log_summary(&self) {
        info!(
            files = self.files,
            columns = self.expected_columns,
            rows = self.rows,
            malformed = self.malformed_total(),
            unranked_rows = self.rows_without_ranking,
            blank_columns = self.blank_columns,
            elapsed_ms = self.elapsed_ms,
            "ranking finished"
        );
    }

    /// Write the stats as pretty-printed JSON.
    ///
    /// # Errors
    /// Fails if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let formatted = serde_json::to_string_pretty(self).context("serialize run stats")?;
        let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        file.write_all(formatted.as_bytes())
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
