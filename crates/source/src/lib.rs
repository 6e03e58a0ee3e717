//! Record source for the client report.
//!
//! The source is a flat delimited text file with one header row followed by rows of
//! `id, name, email, city`. [`RecordStore`] re-reads the file on every query, so each
//! call observes the current content and no state is kept between calls.
//!
//! ## Example
//!
//! ```ignore
//! use report_source::{Aggregator, RecordStore};
//!
//! let store = RecordStore::new("data/clientes.csv");
//! let madrid = store.find_by_city("madrid")?;
//! let per_city = store.count_by_city()?;
//! assert_eq!(per_city.total(), store.count()?);
//! ```

mod aggregate;
mod error;
mod options;
mod store;

pub use aggregate::{Aggregation, Aggregator};
pub use error::SourceError;
pub use options::{MalformedRowPolicy, SourceOptions};
pub use store::{RecordStore, parse_records};
