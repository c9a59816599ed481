use crate::config::{ColumnCount, RankConfig};
use crate::error::{RankError, RankResult};
use crate::io::{AlignedRows, MeasurementFile, RankedSink};
use crate::metrics::RunStats;
use crate::render::process_rows;
use crate::tuple::parse_tuple;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Rank N aligned streams into N sinks.
///
/// `total_files` is the rank basis; normally `readers.len()`. The expected
/// column count is fixed before the first row is processed and never changes.
///
/// # Errors
/// Any desynchronization, non-numeric ranked field or I/O failure aborts the
/// run. Rows already written stay in the sinks.
pub fn rank_streams<R: BufRead, W: Write>(
    readers: Vec<R>,
    sink: &mut RankedSink<W>,
    columns: ColumnCount,
    total_files: usize,
) -> RankResult<RunStats> {
    let mut expected = match columns {
        ColumnCount::Fixed(n) => Some(n),
        ColumnCount::FromFirstLine => None,
    };
    let mut stats = RunStats::new(total_files, expected.unwrap_or(0));

    for set in AlignedRows::new(readers) {
        let set = set?;
        let expected_columns = *expected.get_or_insert_with(|| {
            let n = parse_tuple(&set.lines[0]).len();
            debug!(columns = n, "column count taken from first line");
            n
        });
        stats.expected_columns = expected_columns;

        let ranked = process_rows(&set.lines, expected_columns, total_files, set.row)?;
        sink.write_row(&ranked)?;
        stats.record_row(&ranked);
    }
    Ok(stats)
}

/// Check, open and rank every input of `config`.
///
/// All inputs are checked before any output file is created. Handles are
/// dropped on every exit path.
///
/// # Errors
/// Fails on a missing or unreadable input and on every fatal condition of
/// [`rank_streams`].
pub fn run(config: &RankConfig) -> Result<RunStats> {
    let started = Instant::now();
    let files: Vec<MeasurementFile> = config.inputs.iter().map(MeasurementFile::new).collect();
    if files.is_empty() {
        return Err(RankError::NoInputs.into());
    }
    for f in &files {
        f.check_readable()?;
    }

    info!(
        files = files.len(),
        columns = ?config.columns,
        "ranking measurements"
    );

    let mut readers = Vec::with_capacity(files.len());
    let mut writers = Vec::with_capacity(files.len());
    for f in &files {
        let (r, w) = f
            .open()
            .with_context(|| format!("open {}", f.input.display()))?;
        debug!(input = %f.input.display(), output = %f.output.display(), "opened");
        readers.push(r);
        writers.push((f.output.display().to_string(), w));
    }

    let mut sink = RankedSink::new(writers);
    let mut stats = rank_streams(readers, &mut sink, config.columns, files.len())?;
    sink.finish()?;

    stats.set_elapsed(started.elapsed());
    stats.log_summary();
    Ok(stats)
}
