use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("No page has been started; call new_page() before writing content.")]
    NoActivePage,
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

pub mod algorithms;
pub mod config;
pub mod fonts;

mod elements;
mod engine;

pub use self::config::{BlockKind, LayoutConfig, SpaceRequirements, TextStyle};
pub use self::elements::{ContentBlock, Document, FontWeight, ImageBlock, Page, Rule, TextLine};
pub use self::engine::DocumentLayoutEngine;

pub use report_types::geometry::{Rect, Size};

#[cfg(test)]
mod test_utils;
