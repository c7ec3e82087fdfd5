//! Models module for the Fretboard Diagram Editor
//!
//! This module contains the plain data types that make up a diagram:
//! the board configuration, the active drawing tool and the placed markers.

pub mod core;
pub mod config;
pub mod tool;
pub mod markers;

// Re-export commonly used types
pub use self::core::*;
pub use config::{ConfigField, DiagramConfig};
pub use tool::{ActiveTool, Shape, COLOR_PALETTE, DEFAULT_COLOR};
pub use markers::{MarkerCollection, ToggleOutcome};
