use report_types::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A single line of text positioned at its baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub weight: FontWeight,
}

/// A straight stroked line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// An encoded raster image placed at `rect`, whose origin is its bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub data: Arc<[u8]>,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(TextLine),
    Rule(Rule),
    Image(ImageBlock),
}

/// One page of placed content, in the order it was written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub(crate) blocks: Vec<ContentBlock>,
}

impl Page {
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn text_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageBlock> {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Image(i) => Some(i),
            _ => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Rule(r) => Some(r),
            _ => None,
        })
    }
}

/// A finished, paginated document. Produced by
/// [`DocumentLayoutEngine::finish`](crate::DocumentLayoutEngine::finish) and read-only from
/// then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) page_size: Size,
    pub(crate) pages: Vec<Page>,
}

impl Document {
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text line of the document in page order.
    pub fn text_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(Page::text_lines)
    }
}
