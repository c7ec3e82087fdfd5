//! Editor state machine
//!
//! `EditorState` owns everything a session holds: the board configuration,
//! the active tool, the marker collection, the optional title and the
//! inline text-edit session. Pointer handlers receive surface-relative pixel
//! positions and resolve them through the shared `CoordinateMapper`, so the
//! primary click and the context click always agree on which cell was hit.

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::layout::{CoordinateMapper, LayoutSettings, Point};
use crate::models::{
    ActiveTool, CellPos, ConfigField, DiagramConfig, Marker, MarkerCollection, Shape, ToggleOutcome,
};

/// An open inline text edit on an existing marker
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub cell: CellPos,

    /// Marker text when the edit was opened (prefills the input)
    pub initial_text: String,

    /// Pixel center of the marker, where the input overlay is placed
    pub anchor: Point,
}

/// Result of a primary click
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PrimaryClick {
    /// The click only dismissed an open text edit
    EditDismissed,
    Toggled { cell: CellPos, outcome: ToggleOutcome },
}

/// Serializable view of the whole editor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub config: DiagramConfig,
    pub active_tool: ActiveTool,
    pub marks: Vec<Marker>,
    pub title: Option<String>,
    pub editing: Option<TextEdit>,
}

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    config: DiagramConfig,
    settings: LayoutSettings,
    tool: ActiveTool,
    markers: MarkerCollection,
    title: Option<String>,
    editing: Option<TextEdit>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: LayoutSettings) -> Self {
        Self {
            settings: settings.sanitized(),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn tool(&self) -> &ActiveTool {
        &self.tool
    }

    pub fn markers(&self) -> &MarkerCollection {
        &self.markers
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn editing(&self) -> Option<&TextEdit> {
        self.editing.as_ref()
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.config, self.settings)
    }

    // ------------------------------------------------------------------
    // Configuration and tool
    // ------------------------------------------------------------------

    /// Apply raw numeric input to a config field, returning the stored value.
    ///
    /// Markers outside the new grid are kept but not drawn, so shrinking and
    /// re-growing the board brings them back. An open text edit whose cell
    /// falls outside the grid is closed.
    pub fn set_config_field(&mut self, field: ConfigField, raw: &str) -> u32 {
        let value = self.config.set_field(field, raw);
        let mapper = self.mapper();
        if self.editing.as_ref().is_some_and(|edit| !mapper.is_visible(edit.cell)) {
            self.editing = None;
        }
        value
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.tool.set_shape(shape);
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), EditorError> {
        self.tool.set_color(color)
    }

    /// Set the export title; blank input clears it
    pub fn set_title(&mut self, title: &str) {
        let trimmed = title.trim();
        self.title = if trimmed.is_empty() {
            None
        } else {
            Some(title.to_string())
        };
    }

    // ------------------------------------------------------------------
    // Pointer handling
    // ------------------------------------------------------------------

    /// Primary click at a surface-relative pixel.
    ///
    /// While a text edit is open the click only closes it; otherwise the
    /// marker at the resolved cell is toggled.
    pub fn primary_click(&mut self, point: Point) -> PrimaryClick {
        if self.editing.take().is_some() {
            return PrimaryClick::EditDismissed;
        }
        let cell = self.mapper().cell_at(point);
        let outcome = self.toggle_cell(cell);
        PrimaryClick::Toggled { cell, outcome }
    }

    /// Secondary click: open a text edit on the marker at the resolved cell.
    ///
    /// Returns the opened edit, or `None` when the cell is empty.
    pub fn context_click(&mut self, point: Point) -> Option<TextEdit> {
        let mapper = self.mapper();
        let cell = mapper.cell_at(point);
        let marker = self.markers.get(cell)?;
        let edit = TextEdit {
            cell,
            initial_text: marker.text.clone(),
            anchor: mapper.cell_center(cell),
        };
        self.editing = Some(edit.clone());
        Some(edit)
    }

    /// Toggle a marker at a logical cell using the active tool.
    ///
    /// Cells the current grid does not draw are rejected.
    pub fn toggle(&mut self, cell: CellPos) -> Result<ToggleOutcome, EditorError> {
        self.ensure_visible(cell)?;
        Ok(self.toggle_cell(cell))
    }

    /// Replace a marker's text; `false` when no drawn marker occupies the cell
    pub fn update_text(&mut self, cell: CellPos, text: &str) -> bool {
        self.mapper().is_visible(cell) && self.markers.update_text(cell, text)
    }

    fn toggle_cell(&mut self, cell: CellPos) -> ToggleOutcome {
        let outcome = self.markers.toggle(cell, &self.tool);
        if outcome == ToggleOutcome::Removed && self.editing.as_ref().is_some_and(|edit| edit.cell == cell) {
            self.editing = None;
        }
        log::debug!("toggle {:?} -> {:?} ({} markers)", cell, outcome, self.markers.len());
        outcome
    }

    fn ensure_visible(&self, cell: CellPos) -> Result<(), EditorError> {
        if self.mapper().is_visible(cell) {
            Ok(())
        } else {
            Err(EditorError::CellOffGrid {
                string_index: cell.string_index,
                fret_index: cell.fret_index,
            })
        }
    }

    /// Close the open edit, writing `text` to its marker (Enter)
    pub fn commit_edit(&mut self, text: &str) -> bool {
        match self.editing.take() {
            Some(edit) => self.markers.update_text(edit.cell, text),
            None => false,
        }
    }

    /// Close the open edit without writing (Escape or blur)
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    /// Clear the board when the user confirmed; returns the number removed
    pub fn clear(&mut self, confirmed: bool) -> usize {
        if !confirmed {
            return 0;
        }
        self.editing = None;
        let removed = self.markers.clear();
        log::debug!("cleared {} markers", removed);
        removed
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            config: self.config,
            active_tool: self.tool.clone(),
            marks: self.markers.as_slice().to_vec(),
            title: self.title.clone(),
            editing: self.editing.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_cell(state: &mut EditorState, cell: CellPos) -> PrimaryClick {
        let point = state.mapper().cell_center(cell);
        state.primary_click(point)
    }

    #[test]
    fn test_click_toggles_marker() {
        let mut state = EditorState::new();
        let cell = CellPos::new(0, 2);

        let first = click_cell(&mut state, cell);
        assert_eq!(first, PrimaryClick::Toggled { cell, outcome: ToggleOutcome::Added });
        let marker = state.markers().get(cell).unwrap();
        assert_eq!(marker.shape, Shape::Circle);
        assert_eq!(marker.color, "#ef4444");

        let second = click_cell(&mut state, cell);
        assert_eq!(second, PrimaryClick::Toggled { cell, outcome: ToggleOutcome::Removed });
        assert!(state.markers().is_empty());
    }

    #[test]
    fn test_context_click_on_empty_cell_opens_nothing() {
        let mut state = EditorState::new();
        let point = state.mapper().cell_center(CellPos::new(1, 1));
        assert!(state.context_click(point).is_none());
        assert!(state.editing().is_none());
    }

    #[test]
    fn test_edit_commit_and_cancel() {
        let mut state = EditorState::new();
        let cell = CellPos::new(2, 3);
        state.toggle(cell).unwrap();
        let point = state.mapper().cell_center(cell);

        let edit = state.context_click(point).unwrap();
        assert_eq!(edit.cell, cell);
        assert_eq!(edit.initial_text, "");
        assert_eq!(edit.anchor, point);

        assert!(state.commit_edit("3"));
        assert_eq!(state.markers().get(cell).unwrap().text, "3");
        assert!(state.editing().is_none());

        state.context_click(point).unwrap();
        assert!(state.cancel_edit());
        assert_eq!(state.markers().get(cell).unwrap().text, "3");
    }

    #[test]
    fn test_click_while_editing_only_dismisses() {
        let mut state = EditorState::new();
        let cell = CellPos::new(0, 0);
        state.toggle(cell).unwrap();
        let point = state.mapper().cell_center(cell);
        state.context_click(point).unwrap();

        assert_eq!(state.primary_click(point), PrimaryClick::EditDismissed);
        assert!(state.markers().contains(cell));
        assert!(state.editing().is_none());
    }

    #[test]
    fn test_context_click_clamps_like_primary_click() {
        let mut state = EditorState::new();
        // Far right of the last column on the bottom string
        let far = Point::new(10_000.0, 10_000.0);
        state.primary_click(far);
        let edit = state.context_click(far).unwrap();
        assert_eq!(edit.cell, CellPos::new(5, 4));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut state = EditorState::new();
        for f in 0..3 {
            state.toggle(CellPos::new(1, f)).unwrap();
        }
        assert_eq!(state.clear(false), 0);
        assert_eq!(state.markers().len(), 3);

        assert_eq!(state.clear(true), 3);
        assert!(state.markers().is_empty());
    }

    #[test]
    fn test_shrinking_board_closes_edit_outside_grid() {
        let mut state = EditorState::new();
        let cell = CellPos::new(5, 4);
        state.toggle(cell).unwrap();
        state.context_click(state.mapper().cell_center(cell)).unwrap();

        state.set_config_field(ConfigField::Frets, "3");
        assert!(state.editing().is_none());
        // Marker survives off-grid
        assert!(state.markers().contains(cell));
    }

    #[test]
    fn test_toggle_rejects_cells_off_the_grid() {
        let mut state = EditorState::new();
        assert!(matches!(
            state.toggle(CellPos::new(99, 99)),
            Err(EditorError::CellOffGrid { string_index: 99, fret_index: 99 })
        ));
        assert!(state.toggle(CellPos::new(0, -7)).is_err());

        state.set_config_field(ConfigField::StartFret, "5");
        assert!(state.toggle(CellPos::open(0)).is_err());
        assert!(!state.update_text(CellPos::open(0), "x"));

        assert!(state.markers().is_empty());
        assert_eq!(state.clear(true), 0);
    }

    #[test]
    fn test_removing_edited_marker_closes_edit() {
        let mut state = EditorState::new();
        let cell = CellPos::new(3, 1);
        state.toggle(cell).unwrap();
        state.context_click(state.mapper().cell_center(cell)).unwrap();

        assert_eq!(state.toggle(cell).unwrap(), ToggleOutcome::Removed);
        assert!(state.editing().is_none());
        assert!(!state.commit_edit("lost"));
    }

    #[test]
    fn test_toggling_other_cell_keeps_edit() {
        let mut state = EditorState::new();
        let cell = CellPos::new(3, 1);
        state.toggle(cell).unwrap();
        state.context_click(state.mapper().cell_center(cell)).unwrap();

        state.toggle(CellPos::new(0, 0)).unwrap();
        assert_eq!(state.editing().map(|edit| edit.cell), Some(cell));
    }

    #[test]
    fn test_blank_title_clears() {
        let mut state = EditorState::new();
        state.set_title("Am7 shape");
        assert_eq!(state.title(), Some("Am7 shape"));
        state.set_title("   ");
        assert_eq!(state.title(), None);
    }
}
