use crate::error::RenderError;
use report_layout::Document;

/// Serializes a finished [`Document`] into an output format.
///
/// Implementations return the complete encoded document; writing it to a sink is left
/// to the caller so that sink failures stay distinguishable from rendering failures.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError>;
}
