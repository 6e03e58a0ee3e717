use crate::engine::DocumentLayoutEngine;
use crate::{LayoutConfig, Page};

/// Creates an engine with the default A4 configuration and one page already started.
pub fn create_test_engine() -> DocumentLayoutEngine {
    let mut engine = DocumentLayoutEngine::new(LayoutConfig::default())
        .expect("default config is valid");
    engine.new_page();
    engine
}

/// The text of every line on `page`, in placement order.
pub fn page_texts(page: &Page) -> Vec<&str> {
    page.text_lines().map(|t| t.text.as_str()).collect()
}
