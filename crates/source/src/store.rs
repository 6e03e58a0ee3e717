use crate::aggregate::{Aggregation, Aggregator};
use crate::error::SourceError;
use crate::options::{MalformedRowPolicy, SourceOptions};
use csv::{ByteRecord, ReaderBuilder};
use report_types::Record;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Query access to a delimited record source.
///
/// Nothing is cached: every query opens and parses the file again.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    options: SourceOptions,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, SourceOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: SourceOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record, reporting an unreadable source as an error.
    pub fn try_load_all(&self) -> Result<Vec<Record>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_records(file, &self.path, &self.options)?;
        log::debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Reads every record. An unreadable source is logged and yields an empty sequence;
    /// a malformed row still fails the call under [`MalformedRowPolicy::Strict`].
    pub fn load_all(&self) -> Result<Vec<Record>, SourceError> {
        match self.try_load_all() {
            Err(SourceError::Unreadable { path, source }) => {
                log::error!("Error reading record source {}: {}", path.display(), source);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Records whose city equals `city` ignoring case, in source order.
    /// An empty filter matches nothing.
    pub fn find_by_city(&self, city: &str) -> Result<Vec<Record>, SourceError> {
        if city.is_empty() {
            return Ok(Vec::new());
        }
        let wanted = city.to_lowercase();
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.city.as_deref().is_some_and(|c| c.to_lowercase() == wanted))
            .collect())
    }

    /// Records whose name contains `text` ignoring case. An empty `text` matches every record.
    pub fn find_by_name_contains(&self, text: &str) -> Result<Vec<Record>, SourceError> {
        let needle = text.to_lowercase();
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.name().to_lowercase().contains(&needle))
            .collect())
    }

    pub fn count(&self) -> Result<usize, SourceError> {
        Ok(self.load_all()?.len())
    }

    pub fn count_by_city(&self) -> Result<Aggregation, SourceError> {
        Ok(Aggregator::by_city(&self.load_all()?))
    }
}

/// Parses a delimited source. The first physical line is a header and is discarded.
///
/// A blank line after the header is a malformed row, handled like any other under
/// the configured [`MalformedRowPolicy`]. `origin` only labels errors and log lines.
pub fn parse_records<R: Read>(
    mut reader: R,
    origin: &Path,
    options: &SourceOptions,
) -> Result<Vec<Record>, SourceError> {
    let delimiter = options
        .delimiter_byte()
        .ok_or(SourceError::InvalidDelimiter(options.delimiter))?;

    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|source| SourceError::Unreadable {
            path: origin.to_path_buf(),
            source,
        })?;
    let body = strip_header(&data);
    let lines = LineMap::scan(body, delimiter, options.quoting);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(options.quoting)
        .from_reader(body);

    let mut blanks = lines.blanks.into_iter().peekable();
    let mut starts = lines.records.into_iter();
    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    loop {
        let read = reader.read_byte_record(&mut row);
        if matches!(read, Ok(false)) {
            break;
        }
        let line = starts
            .next()
            .unwrap_or_else(|| row.position().map_or(0, |p| p.line() + 1));
        while let Some(blank) = blanks.next_if(|&b| b < line) {
            handle_malformed(options, origin, blank, "blank line".to_string())?;
        }

        match read {
            Ok(_) => match parse_row(&row, line) {
                Ok(record) => records.push(record),
                Err(reason) => handle_malformed(options, origin, line, reason)?,
            },
            Err(err) => handle_malformed(options, origin, line, err.to_string())?,
        }
    }
    for blank in blanks {
        handle_malformed(options, origin, blank, "blank line".to_string())?;
    }
    Ok(records)
}

/// Everything after the first line terminator (`\n`, `\r\n` or a lone `\r`).
fn strip_header(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == b'\n' || b == b'\r') {
        Some(i) if data[i] == b'\r' && data.get(i + 1) == Some(&b'\n') => &data[i + 2..],
        Some(i) => &data[i + 1..],
        None => &[],
    }
}

/// 1-based line numbers, counting the header, of each row start and each blank line in a body.
#[derive(Debug, Default, PartialEq)]
struct LineMap {
    records: Vec<u64>,
    blanks: Vec<u64>,
}

impl LineMap {
    /// Quoted fields may span lines when `quoting` is on; a quote only opens a field at
    /// its first byte and a doubled quote inside one is literal.
    fn scan(body: &[u8], delimiter: u8, quoting: bool) -> Self {
        let mut map = LineMap::default();
        let mut line = 2;
        let mut i = 0;
        while i < body.len() {
            let start = line;
            let mut empty = true;
            let mut in_quotes = false;
            let mut field_start = true;
            while i < body.len() {
                let b = body[i];
                if !in_quotes && (b == b'\n' || b == b'\r') {
                    i += if b == b'\r' && body.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                    line += 1;
                    break;
                }
                empty = false;
                if b == b'\n' {
                    line += 1;
                }
                if quoting && b == b'"' {
                    if in_quotes && body.get(i + 1) == Some(&b'"') {
                        i += 1;
                    } else if in_quotes {
                        in_quotes = false;
                    } else if field_start {
                        in_quotes = true;
                    }
                }
                field_start = !in_quotes && b == delimiter;
                i += 1;
            }
            if empty {
                map.blanks.push(start);
            } else {
                map.records.push(start);
            }
        }
        map
    }
}

fn handle_malformed(
    options: &SourceOptions,
    origin: &Path,
    line: u64,
    reason: String,
) -> Result<(), SourceError> {
    match options.malformed_rows {
        MalformedRowPolicy::Strict => Err(SourceError::MalformedRow { line, reason }),
        MalformedRowPolicy::Skip => {
            log::warn!(
                "Skipping malformed row at {}:{}: {}",
                origin.display(),
                line,
                reason
            );
            Ok(())
        }
    }
}

fn parse_row(row: &ByteRecord, line: u64) -> Result<Record, String> {
    let field = |i: usize| row.get(i).map(|b| String::from_utf8_lossy(b).into_owned());

    let raw_id = field(0).unwrap_or_default();
    let id = raw_id
        .parse::<i32>()
        .map_err(|e| format!("id {:?} is not an integer ({})", raw_id, e))?;

    if row.len() > 4 {
        log::debug!(
            "Row at line {} has {} fields; columns past the fourth are ignored",
            line,
            row.len()
        );
    }

    Ok(Record {
        id,
        name: field(1),
        email: field(2),
        city: field(3),
    })
}
