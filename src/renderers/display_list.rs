//! Display List for Fretboard Rendering
//!
//! This module defines the output structure produced by the layout engine.
//! The DisplayList contains every drawing primitive with its final pixel
//! geometry and paint, in paint order, so any backend (SVG markup, a canvas,
//! or JavaScript) can draw it without doing layout itself.

use serde::{Deserialize, Serialize};

/// Top-level display list for one diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// Surface width in pixels
    pub width: f32,

    /// Surface height in pixels
    pub height: f32,

    /// Full-surface fill; `None` keeps the surface transparent
    pub background: Option<String>,

    /// Primitives in paint order
    pub items: Vec<RenderItem>,
}

/// Which part of the diagram a primitive belongs to (emitted as a CSS class)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Board,
    Nut,
    Fret,
    String,
    Inlay,
    FretNumber,
    Mark,
    MarkText,
}

impl Layer {
    pub fn class_name(&self) -> &'static str {
        match self {
            Layer::Board => "board",
            Layer::Nut => "nut",
            Layer::Fret => "fret",
            Layer::String => "string",
            Layer::Inlay => "inlay",
            Layer::FretNumber => "fret-number",
            Layer::Mark => "mark",
            Layer::MarkText => "mark-text",
        }
    }
}

/// A single positioned drawing primitive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderItem {
    #[serde(rename_all = "camelCase")]
    Rect {
        layer: Layer,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Corner radius
        rx: f32,
        fill: String,
        glow: bool,
    },

    #[serde(rename_all = "camelCase")]
    Line {
        layer: Layer,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: String,
        stroke_width: f32,
        opacity: f32,
        /// Square line caps (fret wires and nut)
        square_cap: bool,
    },

    #[serde(rename_all = "camelCase")]
    Circle {
        layer: Layer,
        cx: f32,
        cy: f32,
        r: f32,
        fill: String,
        opacity: f32,
        glow: bool,
    },

    #[serde(rename_all = "camelCase")]
    Polygon {
        layer: Layer,
        /// Vertices as (x, y) pairs
        points: Vec<(f32, f32)>,
        fill: String,
        glow: bool,
    },

    /// Text centered horizontally on `x`
    #[serde(rename_all = "camelCase")]
    Text {
        layer: Layer,
        x: f32,
        y: f32,
        content: String,
        fill: String,
        font_size: f32,
        bold: bool,
        /// Vertical centering on the baseline (`dy="0.35em"`)
        center_vertically: bool,
    },
}

impl RenderItem {
    pub fn layer(&self) -> Layer {
        match self {
            RenderItem::Rect { layer, .. }
            | RenderItem::Line { layer, .. }
            | RenderItem::Circle { layer, .. }
            | RenderItem::Polygon { layer, .. }
            | RenderItem::Text { layer, .. } => *layer,
        }
    }
}

impl DisplayList {
    /// Items belonging to one layer, in paint order
    pub fn layer_items(&self, layer: Layer) -> impl Iterator<Item = &RenderItem> {
        self.items.iter().filter(move |item| item.layer() == layer)
    }

    /// Whether any primitive uses the glow filter (its `<defs>` must be emitted)
    pub fn uses_glow(&self) -> bool {
        self.items.iter().any(|item| {
            matches!(
                item,
                RenderItem::Rect { glow: true, .. }
                    | RenderItem::Circle { glow: true, .. }
                    | RenderItem::Polygon { glow: true, .. }
            )
        })
    }
}
