use report_types::Record;
use std::collections::HashMap;

/// Occurrence counts keyed by an exact string value.
///
/// Entries iterate in first-seen order so that charts and listings built from an
/// aggregation are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of records aggregated.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, v)| v).sum()
    }
}

impl<'a> IntoIterator for &'a Aggregation {
    type Item = (&'a str, usize);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, usize)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Group-by reductions over a record sequence.
pub struct Aggregator;

impl Aggregator {
    /// Counts records per key in one pass. Keys compare by exact, case-sensitive equality.
    pub fn group_by<F>(records: &[Record], key: F) -> Aggregation
    where
        F: Fn(&Record) -> &str,
    {
        let mut aggregation = Aggregation::new();
        for record in records {
            aggregation.increment(key(record));
        }
        aggregation
    }

    /// Counts records per city. A record without a city counts under the empty string.
    pub fn by_city(records: &[Record]) -> Aggregation {
        Self::group_by(records, Record::city)
    }
}
