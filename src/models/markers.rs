//! Marker collection
//!
//! Holds the placed markers in insertion order (which is also draw order).
//! At most one marker exists per cell: toggling an occupied cell removes the
//! marker instead of stacking a second one.

use serde::{Deserialize, Serialize};

use super::core::{CellPos, Marker};
use super::tool::ActiveTool;

/// What a toggle did
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct MarkerCollection {
    markers: Vec<Marker>,
}

impl MarkerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the marker at `cell`, or add one with the tool's shape and color
    pub fn toggle(&mut self, cell: CellPos, tool: &ActiveTool) -> ToggleOutcome {
        match self.position(cell) {
            Some(index) => {
                self.markers.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                self.markers.push(Marker::new(cell, tool.shape, tool.color.clone()));
                ToggleOutcome::Added
            }
        }
    }

    /// Replace the text of the marker at `cell`; returns false if the cell is empty
    pub fn update_text(&mut self, cell: CellPos, text: &str) -> bool {
        match self.markers.iter_mut().find(|m| m.is_at(cell)) {
            Some(marker) => {
                marker.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove every marker, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.markers.len();
        self.markers.clear();
        removed
    }

    pub fn get(&self, cell: CellPos) -> Option<&Marker> {
        self.markers.iter().find(|m| m.is_at(cell))
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        self.position(cell).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    fn position(&self, cell: CellPos) -> Option<usize> {
        self.markers.iter().position(|m| m.is_at(cell))
    }
}

impl<'a> IntoIterator for &'a MarkerCollection {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shape;
    use std::collections::HashSet;

    fn tool(shape: Shape, color: &str) -> ActiveTool {
        ActiveTool {
            shape,
            color: color.to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_with_active_tool() {
        let mut markers = MarkerCollection::new();
        let outcome = markers.toggle(CellPos::new(0, 2), &tool(Shape::Triangle, "#a855f7"));

        assert_eq!(outcome, ToggleOutcome::Added);
        let marker = markers.get(CellPos::new(0, 2)).unwrap();
        assert_eq!(marker.shape, Shape::Triangle);
        assert_eq!(marker.color, "#a855f7");
        assert_eq!(marker.text, "");
    }

    #[test]
    fn test_toggle_twice_restores_collection() {
        let mut markers = MarkerCollection::new();
        let red = ActiveTool::default();
        markers.toggle(CellPos::new(1, 1), &red);
        markers.toggle(CellPos::new(3, 0), &red);
        let before = markers.clone();

        assert_eq!(markers.toggle(CellPos::new(4, 2), &red), ToggleOutcome::Added);
        assert_eq!(markers.toggle(CellPos::new(4, 2), &red), ToggleOutcome::Removed);
        assert_eq!(markers, before);
    }

    #[test]
    fn test_readd_resets_text() {
        let mut markers = MarkerCollection::new();
        let red = ActiveTool::default();
        let cell = CellPos::new(2, 3);
        markers.toggle(cell, &red);
        markers.update_text(cell, "R");

        markers.toggle(cell, &red);
        markers.toggle(cell, &red);
        assert_eq!(markers.get(cell).unwrap().text, "");
    }

    #[test]
    fn test_one_marker_per_cell() {
        let mut markers = MarkerCollection::new();
        let cells = [(0, 0), (0, 0), (1, -1), (0, 0), (1, -1), (1, -1), (5, 4)];
        for (s, f) in cells {
            markers.toggle(CellPos::new(s, f), &ActiveTool::default());
            let unique: HashSet<_> = markers.iter().map(|m| m.cell()).collect();
            assert_eq!(unique.len(), markers.len());
        }
        // (0,0) toggled three times, (1,-1) three times, (5,4) once
        assert_eq!(markers.len(), 3);
    }

    #[test]
    fn test_update_text_only_touches_target() {
        let mut markers = MarkerCollection::new();
        let red = ActiveTool::default();
        for (s, f) in [(0, 0), (2, 3), (4, 1)] {
            markers.toggle(CellPos::new(s, f), &red);
        }

        assert!(markers.update_text(CellPos::new(2, 3), "3"));
        assert_eq!(markers.get(CellPos::new(2, 3)).unwrap().text, "3");
        assert_eq!(markers.get(CellPos::new(0, 0)).unwrap().text, "");
        assert_eq!(markers.get(CellPos::new(4, 1)).unwrap().text, "");
    }

    #[test]
    fn test_update_text_on_empty_cell_is_noop() {
        let mut markers = MarkerCollection::new();
        markers.toggle(CellPos::new(0, 0), &ActiveTool::default());
        let before = markers.clone();

        assert!(!markers.update_text(CellPos::new(1, 1), "x"));
        assert_eq!(markers, before);
    }

    #[test]
    fn test_clear_returns_removed_count() {
        let mut markers = MarkerCollection::new();
        for f in 0..4 {
            markers.toggle(CellPos::new(0, f), &ActiveTool::default());
        }
        assert_eq!(markers.clear(), 4);
        assert!(markers.is_empty());
        assert_eq!(markers.clear(), 0);
    }
}
