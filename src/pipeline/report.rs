// src/pipeline/report.rs
use super::config::ReportConfig;
use crate::error::PipelineError;
use chrono::Datelike;
use report_chart::{ChartDataBuilder, ChartRenderer};
use report_layout::{BlockKind, Document, DocumentLayoutEngine};
use report_render_core::DocumentRenderer;
use report_source::{Aggregator, RecordStore};
use report_types::Record;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Outcome of a successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: usize,
    pub bytes: usize,
}

/// Turns a record sequence into a client report.
///
/// The pipeline performs no filtering: the listing, the total and the chart are all
/// computed from exactly the records passed in. It holds no per-call state, so one
/// instance can serve any number of renders.
pub struct ReportPipeline {
    config: ReportConfig,
    chart: Arc<dyn ChartRenderer>,
    renderer: Box<dyn DocumentRenderer>,
    footer_year: Option<i32>,
}

impl ReportPipeline {
    pub(crate) fn new(
        config: ReportConfig,
        chart: Arc<dyn ChartRenderer>,
        renderer: Box<dyn DocumentRenderer>,
        footer_year: Option<i32>,
    ) -> Self {
        Self {
            config,
            chart,
            renderer,
            footer_year,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// A record store over `path` using the configured source options.
    pub fn record_store(&self, path: impl Into<std::path::PathBuf>) -> RecordStore {
        RecordStore::with_options(path, self.config.source.clone())
    }

    fn footer_text(&self) -> String {
        let year = self
            .footer_year
            .unwrap_or_else(|| chrono::Local::now().year());
        self.config.text.footer(year)
    }

    /// Lays the report out into pages without serializing it.
    pub fn layout(&self, records: &[Record]) -> Result<Document, PipelineError> {
        let text = &self.config.text;
        let layout = &self.config.layout;
        let mut engine = DocumentLayoutEngine::new(layout.clone())?;

        engine.new_page();

        engine.place_text(&text.title, layout.title)?;
        engine.advance(30.0);
        engine.advance(10.0);
        engine.write_rule(engine.cursor_y())?;
        engine.advance(20.0);

        engine.place_text(&text.description, layout.body)?;
        engine.advance(30.0);

        engine.place_text(&text.list_heading, layout.subtitle)?;
        engine.advance(25.0);

        for record in records {
            engine.ensure_space_for(BlockKind::ListItem);
            engine.write_text(&list_line(record), layout.body)?;
        }

        engine.advance(20.0);
        engine.place_text(&text.total_line(records.len()), layout.subtitle)?;
        engine.advance(40.0);

        engine.ensure_space_for(BlockKind::Chart);
        let per_city = Aggregator::by_city(records);
        let segments = ChartDataBuilder::build(&per_city);
        let raster = self.chart.render(&segments)?;
        log::debug!(
            "Chart for {} cities rendered at {}x{}",
            segments.len(),
            raster.width,
            raster.height
        );
        engine.write_image(Arc::from(raster.data), self.config.chart.display_size)?;

        Ok(engine.finish(&self.footer_text())?)
    }

    /// Renders the report for `records` and writes the PDF to `sink`.
    ///
    /// The whole document is produced in memory before the first byte reaches the sink,
    /// so a layout or rendering failure never leaves partial output behind.
    pub fn render<W: Write>(
        &self,
        records: &[Record],
        mut sink: W,
    ) -> Result<RenderSummary, PipelineError> {
        let (bytes, summary) = self.render_bytes(records)?;
        sink.write_all(&bytes)
            .and_then(|_| sink.flush())
            .map_err(|source| PipelineError::SinkUnwritable { path: None, source })?;
        Ok(summary)
    }

    /// Renders the report and writes it to the file at `path`, creating or truncating it.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        records: &[Record],
        path: P,
    ) -> Result<RenderSummary, PipelineError> {
        let path = path.as_ref();
        let (bytes, summary) = self.render_bytes(records)?;
        File::create(path)
            .and_then(|mut file| file.write_all(&bytes))
            .map_err(|source| PipelineError::SinkUnwritable {
                path: Some(path.to_path_buf()),
                source,
            })?;
        log::info!("Report written to {}", path.display());
        Ok(summary)
    }

    fn render_bytes(&self, records: &[Record]) -> Result<(Vec<u8>, RenderSummary), PipelineError> {
        log::info!("Rendering report for {} records", records.len());
        let document = self.layout(records)?;
        let bytes = self.renderer.render(&document)?;
        let summary = RenderSummary {
            pages: document.page_count(),
            bytes: bytes.len(),
        };
        log::info!(
            "Report rendered: {} page(s), {} bytes",
            summary.pages,
            summary.bytes
        );
        Ok((bytes, summary))
    }
}

fn list_line(record: &Record) -> String {
    format!("- {} ({})", record.name(), record.city())
}
