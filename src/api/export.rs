//! Export operations for the WASM API
//!
//! - `exportFileName`: the PNG filename derived from the title
//! - `exportSvg`: the export surface markup (with the seeded background)
//! - `downloadPng`: rasterize in the browser and download

use wasm_bindgen::prelude::*;

use super::helpers::{editor_error, with_editor};
use crate::error::EditorError;
use crate::export::{self, browser, ExportSurface};
use crate::{wasm_info, wasm_log};

/// Filename the PNG export will use
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name() -> Result<String, JsValue> {
    with_editor(|state| export::export_file_name(state.title()))
}

/// SVG markup of the export surface
#[wasm_bindgen(js_name = exportSvg)]
pub fn export_svg() -> Result<String, JsValue> {
    with_editor(|state| ExportSurface::capture(state).svg)
}

/// Rasterize the current diagram to PNG and download it
///
/// The diagram is captured when this is called; edits made while the image
/// is still loading do not appear in the download. Failures are logged and
/// reported with a blocking alert.
#[wasm_bindgen(js_name = downloadPng)]
pub fn download_png() -> Result<(), JsValue> {
    wasm_info!("downloadPng called");

    let surface = match with_editor(ExportSurface::capture) {
        Ok(surface) => surface,
        Err(err) => {
            browser::report_export_failure(&EditorError::NotInitialized);
            return Err(err);
        }
    };
    wasm_log!("  Export surface {}x{} -> {}", surface.width, surface.height, surface.file_name);

    browser::start_download(surface).map_err(|err| {
        browser::report_export_failure(&err);
        editor_error(err)
    })
}
