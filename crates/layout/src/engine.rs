use crate::algorithms::pagination;
use crate::config::{BlockKind, LayoutConfig, TextStyle};
use crate::elements::{ContentBlock, Document, ImageBlock, Page, Rule, TextLine};
use crate::fonts;
use crate::LayoutError;
use report_types::{Rect, Size};
use std::sync::Arc;

/// A top-down, cursor-driven layout engine.
///
/// Content is placed at the left margin of the current page, and the cursor moves down
/// by fixed advances. Page breaks happen only where the caller asks for them, either
/// directly through [`new_page`](Self::new_page) or through a threshold check with
/// [`ensure_space`](Self::ensure_space).
#[derive(Debug)]
pub struct DocumentLayoutEngine {
    config: LayoutConfig,
    pages: Vec<Page>,
    cursor_y: f32,
}

impl DocumentLayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        validate(&config)?;
        let cursor_y = config.top();
        Ok(Self {
            config,
            pages: Vec::new(),
            cursor_y,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a fresh page and moves the cursor back to the top margin.
    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor_y = self.config.top();
        log::debug!("Started page {}", self.pages.len());
    }

    /// Places `text` at the left margin on the current baseline without moving the cursor.
    pub fn place_text(&mut self, text: &str, style: TextStyle) -> Result<(), LayoutError> {
        let line = TextLine {
            text: text.to_string(),
            x: self.config.margin,
            y: self.cursor_y,
            font_size: style.font_size,
            weight: style.weight,
        };
        self.current_page()?.blocks.push(ContentBlock::Text(line));
        Ok(())
    }

    /// Places `text` and advances the cursor by one line height.
    pub fn write_text(&mut self, text: &str, style: TextStyle) -> Result<(), LayoutError> {
        self.place_text(text, style)?;
        self.cursor_y -= self.config.line_height;
        Ok(())
    }

    /// Moves the cursor down by `dy` points.
    pub fn advance(&mut self, dy: f32) {
        self.cursor_y -= dy;
    }

    /// Draws a horizontal rule across the content width at height `y`.
    pub fn write_rule(&mut self, y: f32) -> Result<(), LayoutError> {
        let margin = self.config.margin;
        let right = self.config.page_size.width - margin;
        self.current_page()?.blocks.push(ContentBlock::Rule(Rule {
            x1: margin,
            y1: y,
            x2: right,
            y2: y,
        }));
        Ok(())
    }

    /// Starts a new page if the cursor has dropped below `threshold`, or if no page has
    /// been started yet. Returns whether a page was started.
    pub fn ensure_space(&mut self, threshold: f32) -> bool {
        let analysis = pagination::check_threshold(self.cursor_y, threshold, self.config.margin);
        if analysis.should_break {
            log::trace!(
                "Cursor {:.1} below threshold {:.1} ({:.1}pt left), breaking page",
                self.cursor_y,
                threshold,
                analysis.remaining_height
            );
        } else if !self.pages.is_empty() {
            return false;
        }
        self.new_page();
        true
    }

    pub fn ensure_space_for(&mut self, kind: BlockKind) -> bool {
        let threshold = self.config.required_space(kind);
        self.ensure_space(threshold)
    }

    /// Places an encoded image horizontally centered with its top edge at the cursor, then
    /// advances past it and the configured image gap.
    pub fn write_image(&mut self, data: Arc<[u8]>, size: Size) -> Result<(), LayoutError> {
        if size.is_empty() {
            return Err(LayoutError::InvalidGeometry(format!(
                "image size {}x{} is empty",
                size.width, size.height
            )));
        }
        let x = (self.config.page_size.width - size.width) / 2.0;
        let y = self.cursor_y - size.height;
        let rect = Rect::new(x, y, size.width, size.height);
        self.current_page()?
            .blocks
            .push(ContentBlock::Image(ImageBlock { data, rect }));
        self.cursor_y -= size.height + self.config.image_gap;
        Ok(())
    }

    /// Writes `footer` centered on the last page, at the footer offset, and hands back the
    /// finished document.
    pub fn finish(mut self, footer: &str) -> Result<Document, LayoutError> {
        let style = self.config.footer;
        let width = fonts::text_width(footer, style.font_size);
        let line = TextLine {
            text: footer.to_string(),
            x: (self.config.page_size.width - width) / 2.0,
            y: self.config.footer_offset,
            font_size: style.font_size,
            weight: style.weight,
        };
        self.current_page()?.blocks.push(ContentBlock::Text(line));
        log::debug!("Layout finished with {} page(s)", self.pages.len());
        Ok(Document {
            page_size: self.config.page_size,
            pages: self.pages,
        })
    }

    fn current_page(&mut self) -> Result<&mut Page, LayoutError> {
        self.pages.last_mut().ok_or(LayoutError::NoActivePage)
    }
}

fn validate(config: &LayoutConfig) -> Result<(), LayoutError> {
    let Size { width, height } = config.page_size;
    if !(width > 0.0 && height > 0.0) {
        return Err(LayoutError::InvalidGeometry(format!(
            "page size {}x{} must be positive",
            width, height
        )));
    }
    if config.margin < 0.0 || 2.0 * config.margin >= width.min(height) {
        return Err(LayoutError::InvalidGeometry(format!(
            "margin {} leaves no room on a {}x{} page",
            config.margin, width, height
        )));
    }
    if config.line_height <= 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "line height {} must be positive",
            config.line_height
        )));
    }
    Ok(())
}
