//! Fretboard geometry
//!
//! `LayoutSettings` holds the pixel spacing constants and `CoordinateMapper`
//! converts between logical cells and pixel positions on the drawing surface.

pub mod settings;
pub mod mapper;

pub use settings::LayoutSettings;
pub use mapper::{CoordinateMapper, Point, Size};
