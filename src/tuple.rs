//! Splitting raw measurement lines into trimmed fields.
//!
//! The measurement format is plain comma-separated text: no quoting, no
//! escaping, and field 0 is always the query identifier.

use csv::{ReaderBuilder, StringRecord, Terminator};

/// One raw line split into trimmed fields. Field 0 is the query identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    fields: Vec<String>,
}

impl Tuple {
    /// Number of fields, including the query identifier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// A tuple always has at least the identifier field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The query identifier (field 0).
    #[must_use]
    pub fn query_id(&self) -> &str {
        &self.fields[0]
    }

    /// Field `j`, if present.
    #[must_use]
    pub fn field(&self, j: usize) -> Option<&str> {
        self.fields.get(j).map(String::as_str)
    }

    /// All fields in order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<StringRecord> for Tuple {
    /// Fields that are empty before trimming are dropped from the end of the
    /// record; whitespace-only trailing fields stay.
    fn from(record: StringRecord) -> Self {
        let mut raw: Vec<&str> = record.iter().collect();
        while raw.last().is_some_and(|f| f.is_empty()) {
            raw.pop();
        }
        let mut fields: Vec<String> = raw.into_iter().map(|f| f.trim().to_owned()).collect();
        if fields.is_empty() {
            fields.push(String::new());
        }
        Self { fields }
    }
}

/// Split one raw line on `,` and trim every field.
///
/// Quotes are literal characters and a `\r` inside the line is ordinary
/// whitespace. Trailing fields that are empty before trimming are dropped
/// (`"q, 1,,"` has two fields, `"q, 1, "` has three). A line with nothing
/// left yields a single empty identifier field, so every tuple has a query
/// identifier.
///
/// ```
/// use rankbench::tuple::parse_tuple;
///
/// let t = parse_tuple("q7 , 1.5,, 3,");
/// assert_eq!(t.query_id(), "q7");
/// assert_eq!(t.fields(), &["q7", "1.5", "", "3"]);
/// ```
#[must_use]
pub fn parse_tuple(line: &str) -> Tuple {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match rdr.read_record(&mut record) {
        // Reading from an in-memory slice without quoting cannot fail; an
        // empty line produces no record at all.
        Ok(true) => Tuple::from(record),
        _ => Tuple::from(StringRecord::new()),
    }
}

/// The trimmed query identifier of a raw line.
#[must_use]
pub fn query_id(line: &str) -> String {
    parse_tuple(line).query_id().to_owned()
}
