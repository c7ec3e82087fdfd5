//! Layout Engine - Computes fretboard geometry and generates a DisplayList
//!
//! Paint order: board, fret lines (nut first), strings, inlays, fret numbers,
//! then markers in insertion order with their text on top.

use super::display_list::*;
use crate::layout::CoordinateMapper;
use crate::models::{Marker, MarkerCollection, Shape};

/// Frets that carry a position inlay
pub const INLAY_FRETS: [u32; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];

/// Frets whose inlay is doubled (octave points)
pub const DOUBLE_INLAY_FRETS: [u32; 2] = [12, 24];

const BOARD_FILL: &str = "#1e1e1e";
const NUT_STROKE: &str = "#e2e8f0";
const FRET_STROKE: &str = "#64748b";
const STRING_STROKE: &str = "#e2e8f0";
const INLAY_FILL: &str = "#ffffff";
const FRET_NUMBER_FILL: &str = "#94a3b8";
const MARK_TEXT_FILL: &str = "#ffffff";

const NUT_WIDTH: f32 = 8.0;
const FRET_WIDTH: f32 = 2.0;
/// How far strings run past the nut into the open-string area
const STRING_OVERHANG: f32 = 40.0;
const STRING_OPACITY: f32 = 0.8;
const INLAY_RADIUS: f32 = 6.0;
const INLAY_OPACITY: f32 = 0.3;
const DOUBLE_INLAY_OFFSET: f32 = 15.0;
const FRET_NUMBER_OFFSET: f32 = 30.0;
const FRET_NUMBER_SIZE: f32 = 12.0;
const BOARD_OVERHANG: f32 = 10.0;

const MARK_RADIUS: f32 = 16.0;
const MARK_SQUARE_HALF: f32 = 14.0;
const MARK_SQUARE_RADIUS: f32 = 4.0;
const MARK_TEXT_SIZE: f32 = 14.0;

/// Main layout engine for computing display lists
pub struct LayoutEngine {
    mapper: CoordinateMapper,
}

impl LayoutEngine {
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self { mapper }
    }

    /// Compute the complete display list for a board and its markers
    ///
    /// # Arguments
    /// * `markers` - Placed markers; those outside the visible grid are skipped
    /// * `background` - Optional full-surface fill (used for export)
    pub fn compute_layout(&self, markers: &MarkerCollection, background: Option<&str>) -> DisplayList {
        let size = self.mapper.surface_size();
        let mut items = Vec::new();

        self.push_board(&mut items);
        self.push_frets(&mut items, size.height);
        self.push_strings(&mut items, size.width);
        self.push_inlays(&mut items, size.height);
        self.push_fret_numbers(&mut items, size.height);

        let mut hidden = 0;
        for marker in markers {
            if self.mapper.is_visible(marker.cell()) {
                self.push_marker(&mut items, marker);
            } else {
                hidden += 1;
            }
        }
        if hidden > 0 {
            log::debug!("layout skipped {} off-grid markers", hidden);
        }

        DisplayList {
            width: size.width,
            height: size.height,
            background: background.map(str::to_string),
            items,
        }
    }

    fn push_board(&self, items: &mut Vec<RenderItem>) {
        let config = self.mapper.config();
        let s = self.mapper.settings();
        items.push(RenderItem::Rect {
            layer: Layer::Board,
            x: s.pad_x,
            y: s.pad_y - BOARD_OVERHANG,
            width: config.fret_count as f32 * s.fret_spacing,
            height: config.max_string_index() as f32 * s.string_spacing + BOARD_OVERHANG * 2.0,
            rx: 0.0,
            fill: BOARD_FILL.to_string(),
            glow: false,
        });
    }

    fn push_frets(&self, items: &mut Vec<RenderItem>, height: f32) {
        let config = self.mapper.config();
        let pad_y = self.mapper.settings().pad_y;
        for column in 0..=config.fret_count {
            let x = self.mapper.fret_line_x(column);
            let is_nut = column == 0 && config.shows_nut();
            items.push(RenderItem::Line {
                layer: if is_nut { Layer::Nut } else { Layer::Fret },
                x1: x,
                y1: pad_y,
                x2: x,
                y2: height - pad_y,
                stroke: (if is_nut { NUT_STROKE } else { FRET_STROKE }).to_string(),
                stroke_width: if is_nut { NUT_WIDTH } else { FRET_WIDTH },
                opacity: 1.0,
                square_cap: true,
            });
        }
    }

    fn push_strings(&self, items: &mut Vec<RenderItem>, width: f32) {
        let config = self.mapper.config();
        let pad_x = self.mapper.settings().pad_x;
        let start_x = if config.shows_nut() {
            pad_x - STRING_OVERHANG
        } else {
            pad_x
        };
        for string_index in 0..config.string_count {
            let y = self.mapper.string_y(string_index);
            items.push(RenderItem::Line {
                layer: Layer::String,
                x1: start_x,
                y1: y,
                x2: width - pad_x,
                y2: y,
                stroke: STRING_STROKE.to_string(),
                // Lower strings are drawn thicker
                stroke_width: 1.0 + string_index as f32 * 0.6,
                opacity: STRING_OPACITY,
                square_cap: false,
            });
        }
    }

    fn push_inlays(&self, items: &mut Vec<RenderItem>, height: f32) {
        let config = self.mapper.config();
        let y = height / 2.0;
        for column in 0..config.fret_count {
            let fret = config.fret_number(column);
            if !INLAY_FRETS.contains(&fret) {
                continue;
            }
            let x = self.mapper.column_center_x(column as i32);
            let offsets: &[f32] = if DOUBLE_INLAY_FRETS.contains(&fret) {
                &[-DOUBLE_INLAY_OFFSET, DOUBLE_INLAY_OFFSET]
            } else {
                &[0.0]
            };
            for offset in offsets {
                items.push(RenderItem::Circle {
                    layer: Layer::Inlay,
                    cx: x + offset,
                    cy: y,
                    r: INLAY_RADIUS,
                    fill: INLAY_FILL.to_string(),
                    opacity: INLAY_OPACITY,
                    glow: false,
                });
            }
        }
    }

    fn push_fret_numbers(&self, items: &mut Vec<RenderItem>, height: f32) {
        let config = self.mapper.config();
        let y = height - self.mapper.settings().pad_y + FRET_NUMBER_OFFSET;
        for column in 0..config.fret_count {
            items.push(RenderItem::Text {
                layer: Layer::FretNumber,
                x: self.mapper.column_center_x(column as i32),
                y,
                content: config.fret_number(column).to_string(),
                fill: FRET_NUMBER_FILL.to_string(),
                font_size: FRET_NUMBER_SIZE,
                bold: false,
                center_vertically: false,
            });
        }
    }

    fn push_marker(&self, items: &mut Vec<RenderItem>, marker: &Marker) {
        let center = self.mapper.cell_center(marker.cell());
        let (x, y) = (center.x, center.y);
        let fill = marker.color.clone();

        items.push(match marker.shape {
            Shape::Circle => RenderItem::Circle {
                layer: Layer::Mark,
                cx: x,
                cy: y,
                r: MARK_RADIUS,
                fill,
                opacity: 1.0,
                glow: true,
            },
            Shape::Square => RenderItem::Rect {
                layer: Layer::Mark,
                x: x - MARK_SQUARE_HALF,
                y: y - MARK_SQUARE_HALF,
                width: MARK_SQUARE_HALF * 2.0,
                height: MARK_SQUARE_HALF * 2.0,
                rx: MARK_SQUARE_RADIUS,
                fill,
                glow: true,
            },
            Shape::Triangle => RenderItem::Polygon {
                layer: Layer::Mark,
                points: vec![(x, y - 16.0), (x - 14.0, y + 12.0), (x + 14.0, y + 12.0)],
                fill,
                glow: true,
            },
        });

        if marker.has_text() {
            items.push(RenderItem::Text {
                layer: Layer::MarkText,
                x,
                y,
                content: marker.text.clone(),
                fill: MARK_TEXT_FILL.to_string(),
                font_size: MARK_TEXT_SIZE,
                bold: true,
                center_vertically: true,
            });
        }
    }
}
