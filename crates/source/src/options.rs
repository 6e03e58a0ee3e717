use serde::{Deserialize, Serialize};

/// What to do with a row whose id column is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedRowPolicy {
    /// Abort the whole read with [`crate::SourceError::MalformedRow`].
    #[default]
    Strict,
    /// Log the row and continue with the rest of the source.
    Skip,
}

/// Tokenizer settings for the delimited source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceOptions {
    pub delimiter: char,
    /// Honour double-quoted fields. Off by default: values are split on every delimiter.
    pub quoting: bool,
    pub malformed_rows: MalformedRowPolicy,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quoting: false,
            malformed_rows: MalformedRowPolicy::Strict,
        }
    }
}

impl SourceOptions {
    pub fn with_policy(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    pub(crate) fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii)
    }
}
