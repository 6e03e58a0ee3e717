use lopdf::content::{Content, Operation};
use lopdf::{Object, Stream, StringFormat, dictionary};
use report_layout::{ContentBlock, ImageBlock, Page, Rule, TextLine};
use report_render_core::RenderError;
use report_render_core::utils::{font_resource_name, to_win_ansi};
use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Builds the content stream for `page`. Images are referenced as `/Im1`, `/Im2`, ... in
/// the order they appear on the page.
pub(crate) fn render_page_content(page: &Page) -> Content {
    let mut ctx = PageContext::default();
    for block in page.blocks() {
        match block {
            ContentBlock::Text(text) => ctx.draw_text(text),
            ContentBlock::Rule(rule) => ctx.draw_rule(rule),
            ContentBlock::Image(image) => ctx.draw_image(image),
        }
    }
    ctx.finish()
}

pub(crate) fn image_resource_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

#[derive(Default)]
struct PageContext {
    operations: Vec<Operation>,
    images: usize,
}

impl PageContext {
    fn finish(self) -> Content {
        Content {
            operations: self.operations,
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn draw_text(&mut self, text: &TextLine) {
        if text.text.is_empty() {
            return;
        }
        let font = font_resource_name(text.weight);
        let encoded = to_win_ansi(&text.text);
        let substituted = encoded.iter().filter(|b| **b == b'?').count()
            - text.text.chars().filter(|c| *c == '?').count();
        if substituted > 0 {
            log::warn!(
                "{} character(s) in {:?} have no WinAnsi code and were replaced with '?'",
                substituted,
                text.text
            );
        }
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), text.font_size.into()],
        );
        self.push("Td", vec![text.x.into(), text.y.into()]);
        self.push(
            "Tj",
            vec![Object::String(encoded, StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_rule(&mut self, rule: &Rule) {
        self.push("w", vec![1.0f32.into()]);
        self.push("m", vec![rule.x1.into(), rule.y1.into()]);
        self.push("l", vec![rule.x2.into(), rule.y2.into()]);
        self.push("S", vec![]);
    }

    fn draw_image(&mut self, image: &ImageBlock) {
        let name = image_resource_name(self.images);
        self.images += 1;
        let r = image.rect;
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                r.width.into(),
                0.0f32.into(),
                0.0f32.into(),
                r.height.into(),
                r.x.into(),
                r.y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
    }
}

pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decodes an encoded raster and wraps its pixels in an RGB image XObject stream.
pub(crate) fn image_xobject(data: &[u8]) -> Result<Stream, RenderError> {
    let decoded = image::load_from_memory(data).map_err(|e| RenderError::Image(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = compress(rgb.as_raw())?;
    log::debug!(
        "Embedding {}x{} image ({} bytes compressed)",
        width,
        height,
        pixels.len()
    );
    Ok(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        pixels,
    ))
}
