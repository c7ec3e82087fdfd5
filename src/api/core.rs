//! Core editor API
//!
//! Creating the editor, reading its state, and the control-panel setters
//! (board configuration, active tool, title).

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, editor_error, install_editor, serialize, with_editor, with_editor_mut};
use super::types::{ConfigUpdate, PaletteInfo, SurfaceInfo};
use crate::editor::EditorState;
use crate::error::EditorError;
use crate::layout::LayoutSettings;
use crate::models::{ConfigField, Shape};
use crate::{wasm_info, wasm_log};

/// Create a new editor and store it internally
///
/// # Parameters
/// - `options`: optional object overriding any `LayoutSettings` field
///   (`stringSpacing`, `fretSpacing`, `padX`, `padY`, `openStringOffset`)
///
/// # Returns
/// Snapshot of the fresh editor state
#[wasm_bindgen(js_name = createEditor)]
pub fn create_editor(options: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("createEditor called");

    let settings: LayoutSettings = if options.is_undefined() || options.is_null() {
        LayoutSettings::default()
    } else {
        deserialize(options, "Invalid editor options")?
    };

    let state = EditorState::with_settings(settings);
    let snapshot = state.snapshot();
    install_editor(state)?;

    wasm_info!(
        "  Created editor: {} strings, {} frets, start fret {}",
        snapshot.config.string_count,
        snapshot.config.fret_count,
        snapshot.config.start_fret
    );
    serialize(&snapshot, "Serialization error")
}

/// Get a snapshot of the current editor state
#[wasm_bindgen(js_name = getEditorState)]
pub fn get_editor_state() -> Result<JsValue, JsValue> {
    let snapshot = with_editor(|state| state.snapshot())?;
    serialize(&snapshot, "Serialization error")
}

/// Get the current editor state as pretty-printed JSON (for inspection)
#[wasm_bindgen(js_name = getEditorStateJson)]
pub fn get_editor_state_json() -> Result<String, JsValue> {
    let snapshot = with_editor(|state| state.snapshot())?;
    serde_json::to_string_pretty(&snapshot)
        .map_err(|e| editor_error(EditorError::from(e)))
}

/// Palettes and input ranges for building the control panel
#[wasm_bindgen(js_name = getPalettes)]
pub fn get_palettes() -> Result<JsValue, JsValue> {
    serialize(&PaletteInfo::current(), "Serialization error")
}

/// Surface size and spacing of the current board
#[wasm_bindgen(js_name = getSurfaceInfo)]
pub fn get_surface_info() -> Result<JsValue, JsValue> {
    let info = with_editor(|state| SurfaceInfo {
        surface: state.mapper().surface_size(),
        settings: *state.settings(),
    })?;
    serialize(&info, "Serialization error")
}

/// Apply raw numeric input to a config field
///
/// # Parameters
/// - `name`: `strings`, `frets` or `startFret`
/// - `raw`: the input widget's text; unparseable text falls back to the
///   field minimum and out-of-range values clamp
///
/// # Returns
/// `ConfigUpdate` with the stored value and the resulting surface size
#[wasm_bindgen(js_name = setConfigField)]
pub fn set_config_field(name: &str, raw: &str) -> Result<JsValue, JsValue> {
    wasm_log!("setConfigField called: {}='{}'", name, raw);

    let field: ConfigField = name.parse().map_err(editor_error)?;
    let update = with_editor_mut(|state| {
        let value = state.set_config_field(field, raw);
        ConfigUpdate {
            value,
            config: *state.config(),
            surface: state.mapper().surface_size(),
        }
    })?;

    if update.value.to_string() != raw.trim() {
        wasm_log!("  {} stored as {}", name, update.value);
    }
    serialize(&update, "Serialization error")
}

/// Select the shape for new markers (`circle`, `square`, `triangle`)
#[wasm_bindgen(js_name = setActiveShape)]
pub fn set_active_shape(shape: &str) -> Result<(), JsValue> {
    let shape: Shape = shape.parse().map_err(editor_error)?;
    with_editor_mut(|state| state.set_shape(shape))?;
    wasm_log!("Active shape: {}", shape);
    Ok(())
}

/// Select the color for new markers; must be one of the palette colors
#[wasm_bindgen(js_name = setActiveColor)]
pub fn set_active_color(color: &str) -> Result<(), JsValue> {
    with_editor_mut(|state| state.set_color(color))?.map_err(editor_error)?;
    wasm_log!("Active color: {}", color);
    Ok(())
}

/// Set the diagram title (used for the export filename)
#[wasm_bindgen(js_name = setTitle)]
pub fn set_title(title: &str) -> Result<(), JsValue> {
    with_editor_mut(|state| state.set_title(title))?;
    wasm_log!("Title set to '{}'", title);
    Ok(())
}
