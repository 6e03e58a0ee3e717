use crate::error::PipelineError;
use report_chart::ChartStyle;
use report_layout::LayoutConfig;
use report_source::SourceOptions;
use report_types::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed wording of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportText {
    pub title: String,
    pub description: String,
    pub list_heading: String,
    pub total_label: String,
    /// Footer line; `{year}` is replaced with the calendar year.
    pub footer_template: String,
    pub chart_title: String,
}

impl Default for ReportText {
    fn default() -> Self {
        Self {
            title: "Informe de Clientes".to_string(),
            description: "Este documento presenta un resumen de los clientes registrados en la aplicación."
                .to_string(),
            list_heading: "Listado de clientes:".to_string(),
            total_label: "Total de clientes".to_string(),
            footer_template:
                "© {year} Informe generado por la aplicación DAM - Todos los derechos reservados."
                    .to_string(),
            chart_title: "Clientes por ciudad".to_string(),
        }
    }
}

impl ReportText {
    pub fn footer(&self, year: i32) -> String {
        self.footer_template.replace("{year}", &year.to_string())
    }

    pub fn total_line(&self, count: usize) -> String {
        format!("{}: {}", self.total_label, count)
    }
}

/// Chart raster settings plus the box the chart is scaled into on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    pub raster: ChartStyle,
    pub display_size: Size,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            raster: ChartStyle::default(),
            display_size: Size::new(300.0, 200.0),
        }
    }
}

/// Everything that can be configured about a report. Every section and field is optional
/// in the JSON form; missing values take the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub text: ReportText,
    pub layout: LayoutConfig,
    pub chart: ChartSettings,
    pub source: SourceOptions,
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read config from '{}': {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded report configuration from {}", path.display());
        Ok(config)
    }
}
