//! Marker operations on fretboard cells
//!
//! Pointer handlers take surface-relative pixel positions; the logical
//! variants take `(stringIndex, fretIndex)` directly. Both go through the
//! editor's shared coordinate mapper.

use wasm_bindgen::prelude::*;

use super::helpers::{editor_error, serialize, with_editor_mut};
use crate::editor::PrimaryClick;
use crate::layout::Point;
use crate::models::CellPos;
use crate::{wasm_info, wasm_log};

/// Handle a primary click on the fretboard
///
/// # Parameters
/// - `x`, `y`: click position relative to the SVG surface's top-left corner
///
/// # Returns
/// `{ kind: "editDismissed" }` or `{ kind: "toggled", cell, outcome }`
#[wasm_bindgen(js_name = handlePrimaryClick)]
pub fn handle_primary_click(x: f32, y: f32) -> Result<JsValue, JsValue> {
    let result = with_editor_mut(|state| state.primary_click(Point::new(x, y)))?;

    match &result {
        PrimaryClick::EditDismissed => wasm_log!("click at ({}, {}) dismissed text edit", x, y),
        PrimaryClick::Toggled { cell, outcome } => wasm_log!(
            "click at ({}, {}) -> string {}, fret {}: {:?}",
            x,
            y,
            cell.string_index,
            cell.fret_index,
            outcome
        ),
    }
    serialize(&result, "Serialization error")
}

/// Handle a context (secondary) click on the fretboard
///
/// # Returns
/// The opened `TextEdit` (`cell`, `initialText`, `anchor`), or `null` when
/// no marker occupies the resolved cell
#[wasm_bindgen(js_name = handleContextClick)]
pub fn handle_context_click(x: f32, y: f32) -> Result<JsValue, JsValue> {
    let edit = with_editor_mut(|state| state.context_click(Point::new(x, y)))?;
    match &edit {
        Some(edit) => wasm_log!(
            "context click opened edit at string {}, fret {}",
            edit.cell.string_index,
            edit.cell.fret_index
        ),
        None => wasm_log!("context click at ({}, {}) hit an empty cell", x, y),
    }
    serialize(&edit, "Serialization error")
}

/// Toggle a marker at a logical cell using the active tool
///
/// # Returns
/// `"added"` or `"removed"`; throws for a cell the current grid does not draw
#[wasm_bindgen(js_name = toggleMark)]
pub fn toggle_mark(string_index: u32, fret_index: i32) -> Result<JsValue, JsValue> {
    let outcome = with_editor_mut(|state| state.toggle(CellPos::new(string_index, fret_index)))?
        .map_err(editor_error)?;
    serialize(&outcome, "Serialization error")
}

/// Replace the text of the marker at a cell
///
/// # Returns
/// `false` if no drawn marker occupies the cell (nothing changes)
#[wasm_bindgen(js_name = updateMarkText)]
pub fn update_mark_text(string_index: u32, fret_index: i32, text: &str) -> Result<bool, JsValue> {
    with_editor_mut(|state| state.update_text(CellPos::new(string_index, fret_index), text))
}

/// Close the open text edit, writing `text` to its marker (Enter)
#[wasm_bindgen(js_name = commitTextEdit)]
pub fn commit_text_edit(text: &str) -> Result<bool, JsValue> {
    let updated = with_editor_mut(|state| state.commit_edit(text))?;
    wasm_log!("commitTextEdit '{}': updated={}", text, updated);
    Ok(updated)
}

/// Close the open text edit without writing (Escape or blur)
#[wasm_bindgen(js_name = cancelTextEdit)]
pub fn cancel_text_edit() -> Result<bool, JsValue> {
    with_editor_mut(|state| state.cancel_edit())
}

/// Clear every marker when the user confirmed
///
/// # Parameters
/// - `confirmed`: answer of the confirmation dialog; `false` leaves the board unchanged
///
/// # Returns
/// Number of markers removed
#[wasm_bindgen(js_name = clearMarkers)]
pub fn clear_markers(confirmed: bool) -> Result<usize, JsValue> {
    let removed = with_editor_mut(|state| state.clear(confirmed))?;
    if confirmed {
        wasm_info!("Cleared {} markers", removed);
    } else {
        wasm_log!("Clear declined");
    }
    Ok(removed)
}
