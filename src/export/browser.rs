//! Browser-side rasterization of an export surface
//!
//! SVG markup → Blob → object URL → `<img>` → canvas → PNG data URL →
//! anchor click. The image loads asynchronously; failures after that point
//! are reported from inside the load callbacks.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement,
    HtmlImageElement, Url,
};

use super::ExportSurface;
use crate::error::{describe_js_error, EditorError};
use crate::{wasm_error, wasm_info};

/// Message shown in the blocking alert when an export fails
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to download image";

/// Start rasterizing `surface` and trigger a download when done.
///
/// Errors raised before the image starts loading are returned; later ones
/// are reported through `report_export_failure`.
pub fn start_download(surface: ExportSurface) -> Result<(), EditorError> {
    let document = document()?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&surface.svg));
    let options = BlobPropertyBag::new();
    options.set_type("image/svg+xml;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| EditorError::Export(format!("blob: {}", describe_js_error(&e))))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| EditorError::Export(format!("object URL: {}", describe_js_error(&e))))?;

    let image = HtmlImageElement::new()
        .map_err(|e| EditorError::Export(format!("image: {}", describe_js_error(&e))))?;

    let onload = {
        let image = image.clone();
        let url = url.clone();
        Closure::once_into_js(move || {
            let result = draw_and_download(&document, &image, &surface);
            let _ = Url::revoke_object_url(&url);
            match result {
                Ok(()) => wasm_info!("PNG export completed: {}", surface.file_name),
                Err(err) => report_export_failure(&err),
            }
        })
    };
    let onerror = {
        let url = url.clone();
        Closure::once_into_js(move || {
            let _ = Url::revoke_object_url(&url);
            report_export_failure(&EditorError::Export("rendered SVG could not be loaded".into()));
        })
    };

    image.set_onload(Some(onload.unchecked_ref()));
    image.set_onerror(Some(onerror.unchecked_ref()));
    image.set_src(&url);
    Ok(())
}

fn draw_and_download(
    document: &Document,
    image: &HtmlImageElement,
    surface: &ExportSurface,
) -> Result<(), EditorError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| EditorError::Dom(describe_js_error(&e)))?
        .dyn_into()
        .map_err(|_| EditorError::Dom("canvas element has unexpected type".into()))?;
    canvas.set_width(surface.width);
    canvas.set_height(surface.height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| EditorError::Export(describe_js_error(&e)))?
        .ok_or_else(|| EditorError::Export("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| EditorError::Export("2d context has unexpected type".into()))?;
    context
        .draw_image_with_html_image_element(image, 0.0, 0.0)
        .map_err(|e| EditorError::Export(describe_js_error(&e)))?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| EditorError::Export(describe_js_error(&e)))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| EditorError::Dom(describe_js_error(&e)))?
        .dyn_into()
        .map_err(|_| EditorError::Dom("anchor element has unexpected type".into()))?;
    anchor.set_download(&surface.file_name);
    anchor.set_href(&data_url);
    anchor.click();
    Ok(())
}

/// Log an export failure and tell the user with a blocking alert
pub fn report_export_failure(err: &EditorError) {
    wasm_error!("{}", err);
    log::error!("PNG export failed: {}", err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(EXPORT_FAILED_MESSAGE);
    }
}

fn document() -> Result<Document, EditorError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| EditorError::Dom("document not available".into()))
}
