//! Fretboard Diagram Editor WASM API
//!
//! This module provides the JavaScript-facing API for the editor. All
//! functions operate on the WASM-owned editor instance created by
//! `createEditor` (or `mountEditor`).
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, serialization and editor storage
//! - `types`: result structures shared across modules
//! - `core`: editor creation, state snapshots, control-panel setters
//! - `cells`: marker toggling, text editing and clearing
//! - `position`: pixel ↔ cell conversions
//! - `render`: display list and SVG output
//! - `export`: PNG export

pub mod helpers;
pub mod types;
pub mod core;
pub mod cells;
pub mod position;
pub mod render;
pub mod export;

// Re-export all public functions to keep a flat API
pub use self::core::*;
pub use cells::*;
pub use position::{pixel_to_cell, cell_to_pixel};
pub use render::{compute_display_list, render_svg};
pub use export::{export_file_name, export_svg, download_png};
