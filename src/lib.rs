//! # rankbench
//!
//! Cross-file ranking of benchmark measurements.
//!
//! A benchmark run produces one CSV file per configuration, each holding one
//! line per query: the query identifier followed by numeric metrics (or blank
//! fields). Given N such files, rankbench writes a `<input>.ranked.csv` next
//! to each one in which every metric is replaced by its competition rank
//! among the N files for that query.
//!
//! ## Ranking
//!
//! For each row and each metric column:
//! - the smallest value gets label `N - 1`, the next position `N - 2`, and so on;
//! - tied values share the label of the first member of their group, and the
//!   labels they occupy are skipped (`1, 2, 2, 3` over four files gives
//!   `3, 2, 2, 0`);
//! - if the first well-formed tuple has a blank value in a column, that column
//!   is left blank for the whole row.
//!
//! `N` is always the number of files in the run, even when some files have a
//! malformed tuple (wrong field count) for that row. Malformed tuples are
//! written as the bare identifier.
//!
//! ## Quick Start
//!
//! ```
//! use rankbench::rank_line_set;
//!
//! let lines = ["1, 1, 3.0", "1, ERROR", "1, 3, 2.1"];
//! let ranked = rank_line_set(&lines, 3)?;
//! assert_eq!(ranked, vec!["1, 2, 1, ", "1, ", "1, 1, 2, "]);
//! # Ok::<(), rankbench::RankError>(())
//! ```
//!
//! Whole runs go through [`run`]:
//!
//! ```no_run
//! use rankbench::{run, ColumnCount, RankConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RankConfig::new(["a.csv", "b.csv"], ColumnCount::FromFirstLine)?;
//! let stats = run(&config)?;
//! println!("{} rows ranked", stats.rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`tuple`] - splitting raw lines into trimmed fields
//! - [`validation`] - query id checks and well-formed/malformed classification
//! - [`rank`] - competition ranking per column
//! - [`render`] - output line rendering and the per-row pipeline
//! - [`io`] - measurement files and lockstep reading
//! - [`runner`] - whole-run driver
//! - [`metrics`] - run statistics

pub mod config;
pub mod error;
pub mod io;
pub mod metrics;
pub mod rank;
pub mod render;
pub mod runner;
pub mod tuple;
pub mod validation;

pub use config::{ColumnCount, LEGACY_COLUMN_COUNT, RankConfig};
pub use error::{RankError, RankResult};
pub use io::{AlignedRows, MeasurementFile, RankedSink, RowSet, ranked_output_path};
pub use metrics::RunStats;
pub use rank::{Cell, IndexedValue, RankedTuple, competition_labels, parse_measurement, rank_tuples};
pub use render::{DELIMITER, RankedRow, process_rows, rank_line_set, render_tuple};
pub use runner::{rank_streams, run};
pub use tuple::{Tuple, parse_tuple};
pub use validation::{WellFormedIndex, classify, validate_row_ids};
