use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Record source '{path}' cannot be read: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
    #[error("Delimiter {0:?} is not a single ASCII character")]
    InvalidDelimiter(char),
}

impl SourceError {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, SourceError::Unreadable { .. })
    }
}
