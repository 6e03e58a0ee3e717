// src/error.rs
use report_chart::ChartError;
use report_layout::LayoutError;
use report_render_core::RenderError;
use report_source::SourceError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for the report generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Reading records failed: {0}")]
    Source(#[from] SourceError),

    #[error("Chart rendering failed: {0}")]
    Chart(#[from] ChartError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Could not write report to {}: {source}", describe_sink(.path))]
    SinkUnwritable {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe_sink(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "output sink".to_string(),
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::Config(e.to_string())
    }
}
