//! Core rendering abstractions for turning a laid-out report into bytes.
//!
//! This crate provides:
//! - `DocumentRenderer`, the seam between layout and an output format
//! - `RenderError` for rendering failures
//! - Shared helpers for the base-14 font resources and text encoding

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
