//! Measurement file handling: opening inputs, creating ranked outputs, and
//! reading N inputs in lockstep.
//!
//! Readers and writers are generic over [`BufRead`] / [`Write`] so the
//! lockstep logic runs the same over files and in-memory buffers.

use crate::error::{RankError, RankResult};
use crate::render::RankedRow;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to an input path to name its ranked output.
pub const RANKED_SUFFIX: &str = ".ranked.csv";

/// `<input>.ranked.csv`, next to the input.
#[must_use]
pub fn ranked_output_path(input: &Path) -> PathBuf {
    let mut s = OsString::from(input.as_os_str());
    s.push(RANKED_SUFFIX);
    PathBuf::from(s)
}

/// An input path paired with its ranked output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementFile {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl MeasurementFile {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = ranked_output_path(&input);
        Self { input, output }
    }

    /// Check that the input exists and can be opened for reading.
    ///
    /// # Errors
    /// [`RankError::MissingInput`] or [`RankError::UnreadableInput`].
    pub fn check_readable(&self) -> RankResult<()> {
        let meta = match std::fs::metadata(&self.input) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RankError::MissingInput {
                    path: self.input.clone(),
                });
            }
            Err(source) => {
                return Err(RankError::UnreadableInput {
                    path: self.input.clone(),
                    source,
                });
            }
        };
        if meta.is_dir() {
            return Err(RankError::UnreadableInput {
                path: self.input.clone(),
                source: io::Error::other("is a directory"),
            });
        }
        File::open(&self.input)
            .map(drop)
            .map_err(|source| RankError::UnreadableInput {
                path: self.input.clone(),
                source,
            })
    }

    /// Open the input for reading and create (truncate) the output.
    ///
    /// # Errors
    /// Fails if either file cannot be opened.
    pub fn open(&self) -> RankResult<(BufReader<File>, BufWriter<File>)> {
        let reader = File::open(&self.input).map_err(|source| RankError::UnreadableInput {
            path: self.input.clone(),
            source,
        })?;
        let writer = File::create(&self.output).map_err(|e| {
            RankError::io(format!("create {}", self.output.display()), e)
        })?;
        Ok((BufReader::new(reader), BufWriter::new(writer)))
    }
}

/// The N raw lines found at one row position, ordered by file index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    /// 1-based line number.
    pub row: usize,
    pub lines: Vec<String>,
}

/// Lazy, non-restartable sequence of aligned [`RowSet`]s over N readers.
///
/// The sequence ends when reader 0 is exhausted. If any other reader runs out
/// first, one [`RankError::TooFewLines`] is yielded and the sequence ends.
pub struct AlignedRows<R> {
    readers: Vec<R>,
    row: usize,
    done: bool,
}

impl<R: BufRead> AlignedRows<R> {
    #[must_use]
    pub fn new(readers: Vec<R>) -> Self {
        let done = readers.is_empty();
        Self {
            readers,
            row: 0,
            done,
        }
    }

    fn read_row(&mut self) -> RankResult<Option<RowSet>> {
        let row = self.row + 1;
        let mut lines = Vec::with_capacity(self.readers.len());
        for (i, reader) in self.readers.iter_mut().enumerate() {
            let line = read_line(reader)
                .map_err(|e| RankError::io(format!("read file {} line {}", i + 1, row), e))?;
            match line {
                Some(line) => lines.push(line),
                None if i == 0 => return Ok(None),
                None => return Err(RankError::TooFewLines { file: i + 1, row }),
            }
        }
        self.row = row;
        Ok(Some(RowSet { row, lines }))
    }
}

impl<R: BufRead> Iterator for AlignedRows<R> {
    type Item = RankResult<RowSet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_row() {
            Ok(Some(set)) => Some(Ok(set)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for AlignedRows<R> {}

/// One line without its terminator, or `None` at end of stream.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// The N output streams of a run.
///
/// Each line is flushed as soon as it is written so partial output survives
/// an aborted run.
pub struct RankedSink<W: Write> {
    writers: Vec<(String, W)>,
}

impl<W: Write> RankedSink<W> {
    /// `writers` pairs a display name (used in error context) with a stream.
    #[must_use]
    pub fn new(writers: Vec<(String, W)>) -> Self {
        Self { writers }
    }

    /// Append one rendered row, line `i` to stream `i`.
    ///
    /// # Errors
    /// Fails on the first write or flush error.
    pub fn write_row(&mut self, row: &RankedRow) -> RankResult<()> {
        for ((name, w), line) in self.writers.iter_mut().zip(&row.lines) {
            writeln!(w, "{}", line)
                .and_then(|()| w.flush())
                .map_err(|e| RankError::io(format!("write {}", name), e))?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying streams.
    ///
    /// # Errors
    /// Fails if a final flush fails.
    pub fn finish(mut self) -> RankResult<Vec<W>> {
        for (name, w) in &mut self.writers {
            w.flush()
                .map_err(|e| RankError::io(format!("flush {}", name), e))?;
        }
        Ok(self.writers.into_iter().map(|(_, w)| w).collect())
    }
}
