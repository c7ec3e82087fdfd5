//! Renderers module for the Fretboard Diagram Editor
//!
//! This module turns editor state into drawable output: the layout engine
//! produces a display list and the SVG renderer serializes it.

pub mod display_list;
pub mod layout_engine;
pub mod svg;

// Re-export commonly used types
pub use display_list::{DisplayList, Layer, RenderItem};
pub use layout_engine::{LayoutEngine, DOUBLE_INLAY_FRETS, INLAY_FRETS};
pub use svg::SVGRenderer;

use crate::editor::EditorState;

/// Display list for the current on-screen view (transparent background)
pub fn compute_display_list(state: &EditorState) -> DisplayList {
    LayoutEngine::new(state.mapper()).compute_layout(state.markers(), None)
}

/// SVG markup for the current on-screen view
pub fn render_svg(state: &EditorState) -> String {
    SVGRenderer::render(&compute_display_list(state))
}
