//! Position conversion functions
//!
//! Conversions between surface pixels and logical cells for hosts that need
//! hit testing without mutating the board (hover highlights, overlays).

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, with_editor};
use super::types::CellHit;
use crate::layout::Point;
use crate::models::CellPos;

/// Resolve a surface-relative pixel to the nearest valid cell
#[wasm_bindgen(js_name = pixelToCell)]
pub fn pixel_to_cell(x: f32, y: f32) -> Result<JsValue, JsValue> {
    let hit = with_editor(|state| {
        let mapper = state.mapper();
        let cell = mapper.cell_at(Point::new(x, y));
        CellHit {
            cell,
            center: mapper.cell_center(cell),
            occupied: state.markers().contains(cell),
        }
    })?;
    serialize(&hit, "Serialization error")
}

/// Pixel center of a logical cell (`fretIndex = -1` is the open-string slot)
#[wasm_bindgen(js_name = cellToPixel)]
pub fn cell_to_pixel(string_index: u32, fret_index: i32) -> Result<JsValue, JsValue> {
    let center = with_editor(|state| state.mapper().cell_center(CellPos::new(string_index, fret_index)))?;
    serialize(&center, "Serialization error")
}
