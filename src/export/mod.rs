//! PNG export
//!
//! The export surface is the on-screen display list with a solid background
//! fill added underneath, since the screen view is transparent. The SVG is
//! snapshotted when export starts; rasterization happens asynchronously in
//! the browser (see `browser`).

pub mod browser;

use serde::{Deserialize, Serialize};

use crate::editor::EditorState;
use crate::renderers::{LayoutEngine, SVGRenderer};

/// Seeded fill behind the exported image
pub const EXPORT_BACKGROUND: &str = "#0f172a";

/// File stem used when no usable title is set
pub const DEFAULT_FILE_STEM: &str = "guitar-diagram";

/// Everything needed to rasterize one export
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportSurface {
    pub svg: String,
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

impl ExportSurface {
    pub fn capture(state: &EditorState) -> Self {
        let list = LayoutEngine::new(state.mapper()).compute_layout(state.markers(), Some(EXPORT_BACKGROUND));
        Self {
            svg: SVGRenderer::render(&list),
            width: list.width.ceil() as u32,
            height: list.height.ceil() as u32,
            file_name: export_file_name(state.title()),
        }
    }
}

/// Derive the PNG filename from an optional title.
///
/// Whitespace runs become `-`, only ASCII alphanumerics, `-` and `_` survive,
/// and the result is lowercased. An empty result falls back to the default.
pub fn export_file_name(title: Option<&str>) -> String {
    let stem = title.map(sanitize_stem).unwrap_or_default();
    let stem = if stem.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem
    };
    format!("{}.png", stem)
}

fn sanitize_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.trim().chars() {
        if ch.is_whitespace() {
            pending_dash = true;
            continue;
        }
        if !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
            continue;
        }
        if pending_dash && !stem.is_empty() {
            stem.push('-');
        }
        pending_dash = false;
        stem.push(ch.to_ascii_lowercase());
    }
    stem.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellPos;

    #[test]
    fn test_file_name_from_title() {
        assert_eq!(export_file_name(Some("C Major Scale")), "c-major-scale.png");
        assert_eq!(export_file_name(Some("  Am7  (5th pos.) ")), "am7-5th-pos.png");
        assert_eq!(export_file_name(Some("drop_D")), "drop_d.png");
    }

    #[test]
    fn test_file_name_falls_back_to_default() {
        assert_eq!(export_file_name(None), "guitar-diagram.png");
        assert_eq!(export_file_name(Some("")), "guitar-diagram.png");
        assert_eq!(export_file_name(Some("♯♭ / ?")), "guitar-diagram.png");
        assert_eq!(export_file_name(Some("../../etc")), "etc.png");
    }

    #[test]
    fn test_capture_adds_background_and_size() {
        let mut state = EditorState::new();
        state.toggle(CellPos::new(0, 2)).unwrap();
        state.set_title("G shape");

        let surface = ExportSurface::capture(&state);
        assert_eq!((surface.width, surface.height), (620, 330));
        assert_eq!(surface.file_name, "g-shape.png");
        assert!(surface.svg.contains(r##"class="background" x="0" y="0" width="620" height="330" fill="#0f172a""##));
        assert!(surface.svg.contains(r#"class="mark""#));
    }
}
