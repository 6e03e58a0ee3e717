//! Chart data derivation and rasterization.
//!
//! [`ChartDataBuilder`] turns an [`report_source::Aggregation`] into colored segments;
//! a [`ChartRenderer`] turns segments into a fixed-size raster image.

mod data;
mod glyphs;
mod pie;
mod renderer;

pub use data::{ChartDataBuilder, ChartSegment, PALETTE};
pub use pie::{ChartStyle, PieChartRenderer};
pub use renderer::{ChartError, ChartRenderer, RasterImage};
