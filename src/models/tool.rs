//! Active drawing tool: marker shape and fill color
//!
//! Both are chosen from fixed palettes shown in the control panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

/// Fill colors offered by the palette, in display order
pub const COLOR_PALETTE: [&str; 7] = [
    "#ef4444", // Red
    "#22c55e", // Green
    "#3b82f6", // Blue
    "#eab308", // Gold
    "#a855f7", // Purple
    "#ffffff", // White
    "#000000", // Black
];

pub const DEFAULT_COLOR: &str = "#ef4444";

/// Marker shape primitive
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::UnknownShape(s.to_string()))
    }
}

/// Shape and color applied to newly placed markers
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActiveTool {
    pub shape: Shape,
    pub color: String,
}

impl Default for ActiveTool {
    fn default() -> Self {
        Self {
            shape: Shape::Circle,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl ActiveTool {
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Select a palette color (case-insensitive); colors outside the palette are rejected
    pub fn set_color(&mut self, color: &str) -> Result<(), EditorError> {
        let normalized = color.trim().to_ascii_lowercase();
        if !COLOR_PALETTE.contains(&normalized.as_str()) {
            return Err(EditorError::UnknownColor(color.to_string()));
        }
        self.color = normalized;
        Ok(())
    }
}
