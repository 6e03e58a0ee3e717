//! Client listing reports.
//!
//! Records are read from a delimited text source, listed on one or more A4 pages,
//! totalled, and summarised in a per-city pie chart. The result is written as a PDF.
//!
//! ```ignore
//! use client_report::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let records = pipeline.record_store("data/clientes.csv").load_all()?;
//! pipeline.render_to_file(&records, "informe_clientes.pdf")?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{ChartSettings, PipelineBuilder, RenderSummary, ReportConfig, ReportPipeline, ReportText};

pub use report_layout::{Document, LayoutConfig};
pub use report_source::{Aggregation, Aggregator, MalformedRowPolicy, RecordStore, SourceOptions};
pub use report_types::Record;
