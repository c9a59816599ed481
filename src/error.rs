//! Error types for ranking runs.
//!
//! Malformed tuples are not errors: they are absorbed row by row. Everything
//! represented here aborts the whole run.

use std::path::PathBuf;
use std::{fmt, io};

/// Result alias used across the library.
pub type RankResult<T> = Result<T, RankError>;

/// A fatal condition that stops a ranking run.
#[derive(Debug)]
pub enum RankError {
    /// No input files were given.
    NoInputs,
    /// An input path does not exist.
    MissingInput { path: PathBuf },
    /// An input path exists but cannot be opened for reading.
    UnreadableInput { path: PathBuf, source: io::Error },
    /// Field 0 differs between files at the same row position.
    InconsistentQueryIds {
        row: usize,
        expected: String,
        found: String,
    },
    /// A file other than the first ended before the first one did.
    /// `file` is 1-based.
    TooFewLines { file: usize, row: usize },
    /// A ranked field of a well-formed tuple is not a number.
    InvalidNumber {
        query_id: String,
        file: usize,
        column: usize,
        value: String,
    },
    /// Read or write failure.
    Io { context: String, source: io::Error },
}

impl RankError {
    pub(crate) fn io<S: Into<String>>(context: S, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error means the input files are not in lockstep.
    #[must_use]
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Self::InconsistentQueryIds { .. } | Self::TooFewLines { .. }
        )
    }
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInputs => write!(f, "no input files given"),
            Self::MissingInput { path } => {
                write!(f, "The file {} does not exist.", path.display())
            }
            Self::UnreadableInput { path, .. } => {
                write!(f, "The file {} cannot be read.", path.display())
            }
            Self::InconsistentQueryIds {
                row,
                expected,
                found,
            } => write!(
                f,
                "Inconsistent query IDs in line {} ({} versus {})",
                row, found, expected
            ),
            Self::TooFewLines { file, row } => write!(
                f,
                "{}-th file has too few lines (ended before line {}).",
                file, row
            ),
            Self::InvalidNumber {
                query_id,
                file,
                column,
                value,
            } => write!(
                f,
                "query {}: column {} of file {} is not a number: {:?}",
                query_id, column, file, value
            ),
            Self::Io { context, .. } => write!(f, "I/O error: {}", context),
        }
    }
}

impl std::error::Error for RankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableInput { source, .. } | Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
