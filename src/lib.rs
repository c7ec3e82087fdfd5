//! Fretboard Diagram Editor WASM Module
//!
//! Editor state, coordinate mapping and SVG rendering for guitar fretboard
//! diagrams, plus the browser shell that mounts the editor into a page and
//! exports the diagram as a PNG.

pub mod models;
pub mod layout;
pub mod editor;
pub mod renderers;
pub mod export;
pub mod error;
pub mod api;
pub mod dom;

// Re-export commonly used types
pub use models::core::*;
pub use models::{ActiveTool, DiagramConfig, MarkerCollection, Shape};
pub use editor::{EditorState, TextEdit};
pub use error::EditorError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Fretboard Diagram Editor WASM module initialized");
}
