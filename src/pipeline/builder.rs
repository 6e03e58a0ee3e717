// src/pipeline/builder.rs
use super::config::ReportConfig;
use super::report::ReportPipeline;
use crate::error::PipelineError;
use report_chart::{ChartRenderer, PieChartRenderer};
use report_layout::DocumentLayoutEngine;
use report_render_lopdf::LopdfRenderer;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`ReportPipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    config: ReportConfig,
    chart_renderer: Option<Arc<dyn ChartRenderer>>,
    footer_year: Option<i32>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default report configuration.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the report configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = ReportConfig::from_file(path)?;
        Ok(self)
    }

    /// Replaces the built-in pie chart with another chart implementation.
    pub fn with_chart_renderer(mut self, renderer: Arc<dyn ChartRenderer>) -> Self {
        self.chart_renderer = Some(renderer);
        self
    }

    /// Pins the year printed in the footer instead of reading the local clock.
    pub fn with_footer_year(mut self, year: i32) -> Self {
        self.footer_year = Some(year);
        self
    }

    /// Validates the configuration and creates the `ReportPipeline`.
    pub fn build(self) -> Result<ReportPipeline, PipelineError> {
        DocumentLayoutEngine::new(self.config.layout.clone())?;
        if self.config.chart.display_size.is_empty() {
            return Err(PipelineError::Config(format!(
                "chart display size {}x{} must be positive",
                self.config.chart.display_size.width, self.config.chart.display_size.height
            )));
        }

        let chart: Arc<dyn ChartRenderer> = match self.chart_renderer {
            Some(chart) => chart,
            None => Arc::new(
                PieChartRenderer::new(self.config.chart.raster.clone())
                    .with_title(self.config.text.chart_title.clone()),
            ),
        };
        let renderer = LopdfRenderer::new().with_title(self.config.text.title.clone());

        Ok(ReportPipeline::new(
            self.config,
            chart,
            Box::new(renderer),
            self.footer_year,
        ))
    }
}
