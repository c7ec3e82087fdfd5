//! SVG element rendering
//!
//! One display list item becomes one SVG element.

use super::document::escape_xml;
use crate::renderers::display_list::RenderItem;

pub struct SVGElementRenderer;

impl SVGElementRenderer {
    pub fn render_item(item: &RenderItem) -> String {
        match item {
            RenderItem::Rect { layer, x, y, width, height, rx, fill, glow } => format!(
                r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}"{} fill="{}"{}/>"#,
                layer.class_name(),
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                if *rx > 0.0 { format!(r#" rx="{}""#, fmt_num(*rx)) } else { String::new() },
                escape_xml(fill),
                glow_attr(*glow),
            ),

            RenderItem::Line { layer, x1, y1, x2, y2, stroke, stroke_width, opacity, square_cap } => format!(
                r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}{}/>"#,
                layer.class_name(),
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2),
                escape_xml(stroke),
                fmt_num(*stroke_width),
                if *square_cap { r#" stroke-linecap="square""# } else { "" },
                opacity_attr(*opacity),
            ),

            RenderItem::Circle { layer, cx, cy, r, fill, opacity, glow } => format!(
                r#"<circle class="{}" cx="{}" cy="{}" r="{}" fill="{}"{}{}/>"#,
                layer.class_name(),
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                escape_xml(fill),
                opacity_attr(*opacity),
                glow_attr(*glow),
            ),

            RenderItem::Polygon { layer, points, fill, glow } => {
                let points = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"<polygon class="{}" points="{}" fill="{}"{}/>"#,
                    layer.class_name(),
                    points,
                    escape_xml(fill),
                    glow_attr(*glow),
                )
            }

            RenderItem::Text { layer, x, y, content, fill, font_size, bold, center_vertically } => format!(
                r#"<text class="{}" x="{}" y="{}"{} text-anchor="middle" fill="{}" font-size="{}" font-family="sans-serif"{} style="pointer-events: none">{}</text>"#,
                layer.class_name(),
                fmt_num(*x),
                fmt_num(*y),
                if *center_vertically { r#" dy="0.35em""# } else { "" },
                escape_xml(fill),
                fmt_num(*font_size),
                if *bold { r#" font-weight="bold""# } else { "" },
                escape_xml(content),
            ),
        }
    }
}

fn glow_attr(glow: bool) -> &'static str {
    if glow {
        r##" filter="url(#glow)""##
    } else {
        ""
    }
}

fn opacity_attr(opacity: f32) -> String {
    if opacity < 1.0 {
        format!(r#" opacity="{}""#, fmt_num(opacity))
    } else {
        String::new()
    }
}

/// Format a coordinate with at most two decimals ("310", "2.8", "-25")
pub fn fmt_num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::display_list::Layer;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(310.0), "310");
        assert_eq!(fmt_num(1.0 + 3.0 * 0.6), "2.8");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(0.3), "0.3");
    }

    #[test]
    fn test_square_marker_markup() {
        let item = RenderItem::Rect {
            layer: Layer::Mark,
            x: 96.0,
            y: 26.0,
            width: 28.0,
            height: 28.0,
            rx: 4.0,
            fill: "#22c55e".to_string(),
            glow: true,
        };
        assert_eq!(
            SVGElementRenderer::render_item(&item),
            r##"<rect class="mark" x="96" y="26" width="28" height="28" rx="4" fill="#22c55e" filter="url(#glow)"/>"##
        );
    }

    #[test]
    fn test_triangle_points() {
        let item = RenderItem::Polygon {
            layer: Layer::Mark,
            points: vec![(110.0, 24.0), (96.0, 52.0), (124.0, 52.0)],
            fill: "#000000".to_string(),
            glow: true,
        };
        assert!(SVGElementRenderer::render_item(&item).contains(r#"points="110,24 96,52 124,52""#));
    }

    #[test]
    fn test_string_line_opacity() {
        let item = RenderItem::Line {
            layer: Layer::String,
            x1: 20.0,
            y1: 40.0,
            x2: 560.0,
            y2: 40.0,
            stroke: "#e2e8f0".to_string(),
            stroke_width: 1.0,
            opacity: 0.8,
            square_cap: false,
        };
        let markup = SVGElementRenderer::render_item(&item);
        assert!(markup.contains(r#"opacity="0.8""#));
        assert!(!markup.contains("stroke-linecap"));
    }
}
