//! Pixel spacing of the fretboard drawing
//!
//! Defaults match the stylesheet of the host page. JavaScript may override
//! any subset of fields through the options object passed to `createEditor`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    /// Vertical distance between string lines
    pub string_spacing: f32,

    /// Horizontal width of one fret column
    pub fret_spacing: f32,

    /// Left/right padding; the nut sits at `pad_x`
    pub pad_x: f32,

    /// Top/bottom padding; the first string sits at `pad_y`
    pub pad_y: f32,

    /// Distance of the open-string slot to the left of the nut
    pub open_string_offset: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            string_spacing: 50.0,
            fret_spacing: 100.0,
            pad_x: 60.0,
            pad_y: 40.0,
            open_string_offset: 25.0,
        }
    }
}

impl LayoutSettings {
    /// Replace non-positive spacings with the defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            string_spacing: pick(self.string_spacing, defaults.string_spacing),
            fret_spacing: pick(self.fret_spacing, defaults.fret_spacing),
            pad_x: pick(self.pad_x, defaults.pad_x),
            pad_y: pick(self.pad_y, defaults.pad_y),
            open_string_offset: pick(self.open_string_offset, defaults.open_string_offset),
        }
    }
}
