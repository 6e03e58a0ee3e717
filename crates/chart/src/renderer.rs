use crate::data::ChartSegment;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart canvas {0}x{1} has no area")]
    EmptyCanvas(u32, u32),
    #[error("Chart image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// A PNG-encoded raster with its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Turns chart segments into a fixed-size image.
///
/// Implementations must be deterministic: the same segments in the same order
/// produce the same bytes.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, segments: &[ChartSegment]) -> Result<RasterImage, ChartError>;
}
