//! Cell ↔ pixel coordinate mapping
//!
//! Forward mapping places a marker at the center of its fret column on its
//! string line. The inverse mapping is the single hit-testing policy used by
//! every pointer handler: the row rounds to the nearest string, the column
//! floors into a fret bucket, and both clamp into the visible grid. Clicks
//! outside the grid therefore resolve to the nearest valid cell.

use serde::{Deserialize, Serialize};

use super::settings::LayoutSettings;
use crate::models::{CellPos, DiagramConfig};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    config: DiagramConfig,
    settings: LayoutSettings,
}

impl CoordinateMapper {
    pub fn new(config: DiagramConfig, settings: LayoutSettings) -> Self {
        Self { config, settings }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Size of the whole drawing surface including padding
    pub fn surface_size(&self) -> Size {
        let s = &self.settings;
        Size {
            width: self.config.fret_count as f32 * s.fret_spacing + s.pad_x * 2.0,
            height: self.config.max_string_index() as f32 * s.string_spacing + s.pad_y * 2.0,
        }
    }

    /// Y of a string line
    pub fn string_y(&self, string_index: u32) -> f32 {
        self.settings.pad_y + string_index as f32 * self.settings.string_spacing
    }

    /// X of the vertical fret line at the left edge of `column` (column 0 = nut)
    pub fn fret_line_x(&self, column: u32) -> f32 {
        self.settings.pad_x + column as f32 * self.settings.fret_spacing
    }

    /// Horizontal center of a fret column, or the open-string slot for `OPEN_STRING`
    pub fn column_center_x(&self, fret_index: i32) -> f32 {
        let s = &self.settings;
        if fret_index < 0 {
            s.pad_x - s.open_string_offset
        } else {
            s.pad_x + fret_index as f32 * s.fret_spacing + s.fret_spacing / 2.0
        }
    }

    /// Pixel center of a cell (grid → pixel)
    pub fn cell_center(&self, cell: CellPos) -> Point {
        Point::new(self.column_center_x(cell.fret_index), self.string_y(cell.string_index))
    }

    /// Resolve a surface-relative pixel to the nearest valid cell (pixel → grid)
    pub fn cell_at(&self, point: Point) -> CellPos {
        let s = &self.settings;

        let row = ((point.y - s.pad_y) / s.string_spacing).round();
        let string_index = clamp_f32(row, 0, self.config.max_string_index() as i64) as u32;

        let column = ((point.x - s.pad_x) / s.fret_spacing).floor();
        let fret_index = clamp_f32(
            column,
            self.config.min_fret_index() as i64,
            self.config.max_fret_index() as i64,
        ) as i32;

        CellPos::new(string_index, fret_index)
    }

    /// True when a cell lies inside the grid the current config draws
    pub fn is_visible(&self, cell: CellPos) -> bool {
        cell.string_index <= self.config.max_string_index()
            && cell.fret_index >= self.config.min_fret_index()
            && cell.fret_index <= self.config.max_fret_index()
    }

    /// Every reachable cell, row by row, open-string slot first
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        let min = self.config.min_fret_index();
        let max = self.config.max_fret_index();
        (0..self.config.string_count)
            .flat_map(move |s| (min..=max).map(move |f| CellPos::new(s, f)))
    }
}

/// Clamp a float bucket into an integer range; NaN lands on the minimum
fn clamp_f32(value: f32, min: i64, max: i64) -> i64 {
    if value.is_nan() {
        return min;
    }
    (value as i64).clamp(min, max)
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(DiagramConfig::default(), LayoutSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(strings: u32, frets: u32, start: u32) -> CoordinateMapper {
        CoordinateMapper::new(DiagramConfig::new(strings, frets, start), LayoutSettings::default())
    }

    #[test]
    fn test_surface_size() {
        let size = mapper(6, 5, 1).surface_size();
        assert_eq!(size.width, 620.0);
        assert_eq!(size.height, 330.0);

        // A single string collapses to the padding band
        let size = mapper(1, 1, 1).surface_size();
        assert_eq!(size.width, 220.0);
        assert_eq!(size.height, 80.0);
    }

    #[test]
    fn test_cell_center() {
        let m = mapper(6, 5, 1);
        assert_eq!(m.cell_center(CellPos::new(0, 2)), Point::new(310.0, 40.0));
        assert_eq!(m.cell_center(CellPos::new(5, 0)), Point::new(110.0, 290.0));
        assert_eq!(m.cell_center(CellPos::open(3)), Point::new(35.0, 190.0));
    }

    #[test]
    fn test_round_trip_all_cells() {
        for (strings, frets, start) in [(6, 5, 1), (4, 12, 1), (12, 24, 5), (1, 1, 1), (7, 3, 9)] {
            let m = mapper(strings, frets, start);
            for cell in m.cells() {
                assert_eq!(m.cell_at(m.cell_center(cell)), cell, "config {strings}/{frets}/{start}");
            }
        }
    }

    #[test]
    fn test_row_rounds_to_nearest_string() {
        let m = mapper(6, 5, 1);
        // 24px below string 1 still belongs to string 1, 26px to string 2
        assert_eq!(m.cell_at(Point::new(150.0, 114.0)).string_index, 1);
        assert_eq!(m.cell_at(Point::new(150.0, 116.0)).string_index, 2);
    }

    #[test]
    fn test_out_of_grid_clicks_clamp() {
        let m = mapper(6, 5, 1);
        assert_eq!(m.cell_at(Point::new(-500.0, -500.0)), CellPos::open(0));
        assert_eq!(m.cell_at(Point::new(5000.0, 5000.0)), CellPos::new(5, 4));
        assert_eq!(m.cell_at(Point::new(f32::NAN, 40.0)), CellPos::open(0));
    }

    #[test]
    fn test_open_string_only_reachable_at_nut() {
        let at_nut = mapper(6, 5, 1);
        assert_eq!(at_nut.cell_at(Point::new(40.0, 40.0)).fret_index, -1);

        let up_the_neck = mapper(6, 5, 5);
        assert_eq!(up_the_neck.cell_at(Point::new(40.0, 40.0)).fret_index, 0);
        assert!(!up_the_neck.is_visible(CellPos::open(0)));
        assert_eq!(up_the_neck.cells().count(), 30);
        assert_eq!(at_nut.cells().count(), 36);
    }
}
