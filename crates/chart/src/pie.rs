use crate::data::ChartSegment;
use crate::glyphs::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::renderer::{ChartError, ChartRenderer, RasterImage};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use report_types::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::io::Cursor;

/// Raster size and colors of the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub outline: Color,
    pub text: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            background: Color::WHITE,
            outline: Color::gray(128),
            text: Color::BLACK,
        }
    }
}

const TITLE_SCALE: u32 = 2;
const LEGEND_SCALE: u32 = 2;
const PADDING: i64 = 16;
const SWATCH: i64 = 14;
const LEGEND_ROW: i64 = 24;
const MIN_LEGEND_ROW: i64 = SWATCH + 2;

/// Draws a proportional pie with a legend on its right.
///
/// Slices start at twelve o'clock and run clockwise in segment order.
#[derive(Debug, Clone)]
pub struct PieChartRenderer {
    style: ChartStyle,
    title: Option<String>,
}

impl PieChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

impl Default for PieChartRenderer {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

impl ChartRenderer for PieChartRenderer {
    fn render(&self, segments: &[ChartSegment]) -> Result<RasterImage, ChartError> {
        let (width, height) = (self.style.width, self.style.height);
        if width == 0 || height == 0 {
            return Err(ChartError::EmptyCanvas(width, height));
        }

        let mut canvas = Canvas::new(width, height, self.style.background);

        let mut plot_top = PADDING;
        if let Some(title) = &self.title {
            let w = glyphs::text_width(title) as i64 * TITLE_SCALE as i64;
            let x = (width as i64 - w) / 2;
            canvas.draw_text(title, x, PADDING, TITLE_SCALE, self.style.text);
            plot_top += (GLYPH_HEIGHT * TITLE_SCALE) as i64 + PADDING;
        }

        let plot_height = (height as i64 - plot_top - PADDING).max(0);
        let radius = (plot_height / 2).min(width as i64 * 3 / 10).max(0);
        let cx = PADDING + radius + PADDING;
        let cy = plot_top + plot_height / 2;

        canvas.draw_pie(cx, cy, radius, segments, self.style.outline);

        let legend_x = cx + radius + 2 * PADDING;
        self.draw_legend(&mut canvas, segments, legend_x, plot_top, plot_height);

        let mut data = Vec::new();
        DynamicImage::ImageRgb8(canvas.image).write_to(&mut Cursor::new(&mut data), ImageFormat::Png)?;
        log::debug!(
            "Rendered pie chart with {} segments ({} bytes PNG)",
            segments.len(),
            data.len()
        );

        Ok(RasterImage {
            width,
            height,
            data,
        })
    }
}

impl PieChartRenderer {
    fn draw_legend(
        &self,
        canvas: &mut Canvas,
        segments: &[ChartSegment],
        x: i64,
        top: i64,
        available: i64,
    ) {
        let (pitch, rows) = legend_rows(segments.len(), available);
        if rows < segments.len() {
            log::warn!(
                "Chart legend has room for {} of {} entries; the rest are omitted",
                rows,
                segments.len()
            );
        }
        let mut y = top + (available - rows as i64 * pitch) / 2;

        let text_x = x + SWATCH + 8;
        let room = canvas.width() as i64 - text_x - PADDING;
        let max_chars = (room / (ADVANCE * LEGEND_SCALE) as i64).max(0) as usize;

        for segment in segments.iter().take(rows) {
            canvas.fill_rect(x, y, SWATCH, SWATCH, segment.color);
            canvas.stroke_rect(x, y, SWATCH, SWATCH, self.style.outline);
            let label: String = segment.label.chars().take(max_chars).collect();
            let text_y = y + (SWATCH - (GLYPH_HEIGHT * LEGEND_SCALE) as i64) / 2;
            canvas.draw_text(&label, text_x, text_y, LEGEND_SCALE, self.style.text);
            y += pitch;
        }
    }
}

/// Row pitch and number of legend rows that fit in `available` pixels.
/// Rows tighten from the default pitch down to just above the swatch height before
/// any entry is dropped.
fn legend_rows(entries: usize, available: i64) -> (i64, usize) {
    if entries == 0 || available <= 0 {
        return (LEGEND_ROW, 0);
    }
    let pitch = (available / entries as i64).clamp(MIN_LEGEND_ROW, LEGEND_ROW);
    let rows = ((available / pitch).max(0) as usize).min(entries);
    (pitch, rows)
}

struct Canvas {
    image: RgbImage,
}

fn rgb(c: Color) -> Rgb<u8> {
    Rgb([c.r, c.g, c.b])
}

impl Canvas {
    fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, rgb(background)),
        }
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, rgb(color));
        }
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        for px in x..x + w {
            self.put(px, y, color);
            self.put(px, y + h - 1, color);
        }
        for py in y..y + h {
            self.put(x, py, color);
            self.put(x + w - 1, py, color);
        }
    }

    fn draw_text(&mut self, text: &str, x: i64, y: i64, scale: u32, color: Color) {
        let scale = scale as i64;
        let mut pen_x = x;
        for c in text.chars() {
            let rows = glyphs::glyph(c);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            pen_x + col as i64 * scale,
                            y + row as i64 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen_x += ADVANCE as i64 * scale;
        }
    }

    /// Fills the disc slice by slice and strokes its rim. With no positive values only
    /// the rim is drawn.
    fn draw_pie(&mut self, cx: i64, cy: i64, radius: i64, segments: &[ChartSegment], outline: Color) {
        if radius <= 0 {
            return;
        }
        let total: usize = segments.iter().map(|s| s.value).sum();
        let mut bounds = Vec::with_capacity(segments.len());
        let mut acc = 0usize;
        for s in segments {
            acc += s.value;
            bounds.push(acc as f64 / total.max(1) as f64);
        }

        let r = radius as f64;
        let rim = (r - 1.5).max(0.0);
        for py in cy - radius..=cy + radius {
            for px in cx - radius..=cx + radius {
                let dx = px as f64 + 0.5 - cx as f64;
                let dy = py as f64 + 0.5 - cy as f64;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > r {
                    continue;
                }
                if dist >= rim {
                    self.put(px, py, outline);
                    continue;
                }
                if total == 0 {
                    continue;
                }
                let mut angle = dx.atan2(-dy);
                if angle < 0.0 {
                    angle += TAU;
                }
                let fraction = angle / TAU;
                let idx = bounds
                    .iter()
                    .position(|b| fraction < *b)
                    .unwrap_or(segments.len() - 1);
                self.put(px, py, segments[idx].color);
            }
        }
    }
}
