//! Error types for the editor
//!
//! Every failure surfaced to JavaScript goes through `EditorError` and is
//! converted to a `JsValue` string at the API boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditorError {
    /// An API call arrived before `createEditor`/`mountEditor`
    #[error("Editor not initialized")]
    NotInitialized,

    #[error("Unknown config field: '{0}' (expected strings, frets or startFret)")]
    UnknownConfigField(String),

    #[error("Unknown shape: '{0}'")]
    UnknownShape(String),

    #[error("Color not in palette: '{0}'")]
    UnknownColor(String),

    /// A logical cell outside the grid the current config draws
    #[error("Cell is off the grid: string {string_index}, fret {fret_index}")]
    CellOffGrid { string_index: u32, fret_index: i32 },

    /// A DOM node or browser API was unavailable
    #[error("DOM error: {0}")]
    Dom(String),

    /// Rasterizing or downloading the diagram failed
    #[error("Failed to download image: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Serialization(err.to_string())
    }
}

/// Describe a thrown JS value for log output
pub fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
