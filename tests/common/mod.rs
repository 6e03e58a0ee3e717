pub mod fixtures;
pub mod pdf_assertions;

use client_report::{PipelineBuilder, ReportPipeline};
use lopdf::Document as LopdfDocument;
use report_types::Record;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Year pinned into the footer of every test report.
pub const FOOTER_YEAR: i32 = 2026;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based)
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// A pipeline with the default configuration and a fixed footer year.
pub fn test_pipeline() -> ReportPipeline {
    PipelineBuilder::new()
        .with_footer_year(FOOTER_YEAR)
        .build()
        .expect("default pipeline builds")
}

/// Render `records` with the default test pipeline into memory.
pub fn generate_report(records: &[Record]) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let mut bytes = Vec::new();
    test_pipeline().render(records, &mut bytes)?;
    GeneratedPdf::from_bytes(bytes)
}
