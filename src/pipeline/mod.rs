//! Report pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder for a [`ReportPipeline`]
//! - [`ReportConfig`]: texts, page geometry, chart and source settings
//! - [`ReportPipeline`]: records in, laid-out document and PDF bytes out

mod builder;
mod config;
mod report;

pub use builder::PipelineBuilder;
pub use config::{ChartSettings, ReportConfig, ReportText};
pub use report::{RenderSummary, ReportPipeline};
