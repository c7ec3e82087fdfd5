//! Core data structures for the Fretboard Diagram Editor
//!
//! A diagram is addressed by logical cells: a string row and a fret column
//! relative to the first visible fret. Fret column `-1` is the open-string
//! slot to the left of the nut.

use serde::{Deserialize, Serialize};

use super::tool::Shape;

/// Fret column used for open (unfretted) strings
pub const OPEN_STRING: i32 = -1;

/// A logical position on the fretboard grid
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CellPos {
    /// String row, 0 is the top line of the diagram
    pub string_index: u32,

    /// Visible fret column, `OPEN_STRING` for the slot before the nut
    pub fret_index: i32,
}

impl CellPos {
    pub fn new(string_index: u32, fret_index: i32) -> Self {
        Self {
            string_index,
            fret_index,
        }
    }

    /// Open-string slot on the given string
    pub fn open(string_index: u32) -> Self {
        Self::new(string_index, OPEN_STRING)
    }

    pub fn is_open_string(&self) -> bool {
        self.fret_index == OPEN_STRING
    }
}

/// A placed annotation on the fretboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub string_index: u32,

    /// Visible fret column (`-1` = open string)
    pub fret_index: i32,

    pub shape: Shape,

    /// Fill color as a `#rrggbb` hex string
    pub color: String,

    /// Optional label drawn centered on the shape (empty = none)
    pub text: String,
}

impl Marker {
    pub fn new(cell: CellPos, shape: Shape, color: impl Into<String>) -> Self {
        Self {
            string_index: cell.string_index,
            fret_index: cell.fret_index,
            shape,
            color: color.into(),
            text: String::new(),
        }
    }

    pub fn cell(&self) -> CellPos {
        CellPos::new(self.string_index, self.fret_index)
    }

    pub fn is_at(&self, cell: CellPos) -> bool {
        self.string_index == cell.string_index && self.fret_index == cell.fret_index
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_starts_without_text() {
        let marker = Marker::new(CellPos::new(2, 3), Shape::Square, "#22c55e");
        assert_eq!(marker.cell(), CellPos::new(2, 3));
        assert!(!marker.has_text());
        assert!(marker.is_at(CellPos::new(2, 3)));
        assert!(!marker.is_at(CellPos::new(3, 2)));
    }

    #[test]
    fn test_marker_serializes_camel_case() {
        let marker = Marker::new(CellPos::open(0), Shape::Circle, "#ef4444");
        let json = serde_json::to_string(&marker).unwrap();
        assert!(json.contains("\"stringIndex\":0"));
        assert!(json.contains("\"fretIndex\":-1"));
        assert!(json.contains("\"shape\":\"circle\""));
    }
}
