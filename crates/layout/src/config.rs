use crate::elements::FontWeight;
use report_types::Size;
use serde::{Deserialize, Serialize};

/// The kinds of block that are guarded by a page-break threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    ListItem,
    Chart,
}

/// Minimum cursor height, in points above the bottom edge, at which a block may start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpaceRequirements {
    pub list_item: f32,
    pub chart: f32,
}

impl Default for SpaceRequirements {
    fn default() -> Self {
        Self {
            list_item: 150.0,
            chart: 350.0,
        }
    }
}

impl SpaceRequirements {
    pub fn get(&self, kind: BlockKind) -> f32 {
        match kind {
            BlockKind::ListItem => self.list_item,
            BlockKind::Chart => self.chart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl TextStyle {
    pub const fn regular(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn bold(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Bold,
        }
    }
}

/// Page geometry, type scale and spacing used by the layout engine.
///
/// All lengths are PDF points with the origin at the bottom-left corner of the page.
/// Defaults describe an A4 portrait page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_size: Size,
    pub margin: f32,
    /// Vertical advance after each written line of text.
    pub line_height: f32,
    /// Extra gap left below an image.
    pub image_gap: f32,
    /// Baseline of the footer, measured from the bottom edge.
    pub footer_offset: f32,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub body: TextStyle,
    pub footer: TextStyle,
    pub required_space: SpaceRequirements,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: Size::new(595.0, 842.0),
            margin: 50.0,
            line_height: 15.0,
            image_gap: 30.0,
            footer_offset: 30.0,
            title: TextStyle::bold(20.0),
            subtitle: TextStyle::bold(14.0),
            body: TextStyle::regular(10.0),
            footer: TextStyle::regular(8.0),
            required_space: SpaceRequirements::default(),
        }
    }
}

impl LayoutConfig {
    /// Cursor position at the top of a fresh page.
    pub fn top(&self) -> f32 {
        self.page_size.height - self.margin
    }

    pub fn content_width(&self) -> f32 {
        self.page_size.width - 2.0 * self.margin
    }

    pub fn required_space(&self, kind: BlockKind) -> f32 {
        self.required_space.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_a4() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_size, Size::new(595.0, 842.0));
        assert_eq!(config.top(), 792.0);
        assert_eq!(config.content_width(), 495.0);
        assert_eq!(config.required_space(BlockKind::ListItem), 150.0);
        assert_eq!(config.required_space(BlockKind::Chart), 350.0);
        assert_eq!(config.title, TextStyle::bold(20.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "margin": 36, "requiredSpace": { "chart": 400 }, "body": { "fontSize": 11 } }"#;
        let config: LayoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.margin, 36.0);
        assert_eq!(config.required_space(BlockKind::Chart), 400.0);
        assert_eq!(config.required_space(BlockKind::ListItem), 150.0);
        assert_eq!(config.body, TextStyle::regular(11.0));
        assert_eq!(config.line_height, 15.0);
    }
}
