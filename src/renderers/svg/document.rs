//! SVG document generation
//!
//! Root element, filter definitions and the optional background fill.

use super::elements::fmt_num;
use super::SVG_CLASS;
use crate::renderers::display_list::DisplayList;

/// Soft glow applied to markers
const GLOW_FILTER: &str = concat!(
    r#"  <defs>"#, "\n",
    r#"    <filter id="glow" x="-50%" y="-50%" width="200%" height="200%">"#, "\n",
    r#"      <feGaussianBlur stdDeviation="2.5" result="coloredBlur"/>"#, "\n",
    r#"      <feMerge>"#, "\n",
    r#"        <feMergeNode in="coloredBlur"/>"#, "\n",
    r#"        <feMergeNode in="SourceGraphic"/>"#, "\n",
    r#"      </feMerge>"#, "\n",
    r#"    </filter>"#, "\n",
    r#"  </defs>"#, "\n",
);

pub struct SVGDocumentGenerator;

impl SVGDocumentGenerator {
    /// Opening `<svg>` tag plus everything drawn beneath the display list items
    pub fn open(list: &DisplayList) -> String {
        let width = fmt_num(list.width);
        let height = fmt_num(list.height);
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_CLASS, width, height, width, height
        );
        out.push('\n');

        if list.uses_glow() {
            out.push_str(GLOW_FILTER);
        }

        if let Some(fill) = &list.background {
            out.push_str(&format!(
                r#"  <rect class="background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                width,
                height,
                escape_xml(fill)
            ));
            out.push('\n');
        }

        out
    }

    pub fn close() -> &'static str {
        "</svg>\n"
    }
}

/// Escape text for use in SVG attribute values and text nodes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"A&B "C" <D>"#), "A&amp;B &quot;C&quot; &lt;D&gt;");
        assert_eq!(escape_xml("Em7"), "Em7");
    }
}
