//! SVG rendering output
//!
//! This module serializes a `DisplayList` to standalone SVG markup. The same
//! markup is mounted on screen and rasterized for PNG export.

pub mod elements;
pub mod document;

pub use elements::*;
pub use document::*;

use crate::renderers::display_list::DisplayList;

/// CSS class of the root `<svg>` element
pub const SVG_CLASS: &str = "fretboard-svg";

/// SVG document generator
pub struct SVGRenderer;

impl SVGRenderer {
    pub fn render(list: &DisplayList) -> String {
        let mut out = SVGDocumentGenerator::open(list);
        for item in &list.items {
            out.push_str("  ");
            out.push_str(&SVGElementRenderer::render_item(item));
            out.push('\n');
        }
        out.push_str(SVGDocumentGenerator::close());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CoordinateMapper, LayoutSettings};
    use crate::models::{ActiveTool, CellPos, DiagramConfig, MarkerCollection};
    use crate::renderers::layout_engine::LayoutEngine;

    fn render(markers: &MarkerCollection, background: Option<&str>) -> String {
        let engine = LayoutEngine::new(CoordinateMapper::new(
            DiagramConfig::default(),
            LayoutSettings::default(),
        ));
        SVGRenderer::render(&engine.compute_layout(markers, background))
    }

    #[test]
    fn test_empty_board_markup() {
        let svg = render(&MarkerCollection::new(), None);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"class="fretboard-svg""#));
        assert!(svg.contains(r#"width="620" height="330""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        // No markers means no glow filter and no background
        assert!(!svg.contains("<filter"));
        assert!(!svg.contains(r#"class="background""#));
    }

    #[test]
    fn test_marker_markup_uses_glow() {
        let mut markers = MarkerCollection::new();
        markers.toggle(CellPos::new(0, 2), &ActiveTool::default());
        let svg = render(&markers, None);
        assert!(svg.contains(r#"<filter id="glow""#));
        assert!(svg.contains(r##"<circle class="mark" cx="310" cy="40" r="16" fill="#ef4444" filter="url(#glow)"/>"##));
    }

    #[test]
    fn test_background_fill_is_first() {
        let svg = render(&MarkerCollection::new(), Some("#0f172a"));
        let background = svg.find(r##"fill="#0f172a""##).unwrap();
        let board = svg.find(r#"class="board""#).unwrap();
        assert!(background < board);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut markers = MarkerCollection::new();
        markers.toggle(CellPos::new(1, 1), &ActiveTool::default());
        markers.update_text(CellPos::new(1, 1), "<b>&");
        let svg = render(&markers, None);
        assert!(svg.contains("&lt;b&gt;&amp;"));
        assert!(!svg.contains("<b>"));
    }
}
