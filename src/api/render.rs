//! Rendering API
//!
//! The display list lets JavaScript draw the board itself; `renderSvg`
//! returns ready-to-mount markup.

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, with_editor};
use crate::renderers;
use crate::wasm_log;

/// Compute the display list for the current state
#[wasm_bindgen(js_name = computeDisplayList)]
pub fn compute_display_list() -> Result<JsValue, JsValue> {
    let list = with_editor(renderers::compute_display_list)?;
    wasm_log!("computeDisplayList: {} items, {}x{}", list.items.len(), list.width, list.height);
    serialize(&list, "Serialization error")
}

/// SVG markup for the current state (transparent background)
#[wasm_bindgen(js_name = renderSvg)]
pub fn render_svg() -> Result<String, JsValue> {
    with_editor(renderers::render_svg)
}
