//! PDF renderer using lopdf.
//!
//! Text is set in the base-14 Helvetica faces, so the output embeds no font programs.
//! Raster images are decoded and re-embedded as Flate-compressed RGB image XObjects.

mod helpers;
mod renderer;

pub use renderer::LopdfRenderer;
