//! Shared types for the WASM API
//!
//! Result structures returned to JavaScript by more than one API module.

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutSettings, Point, Size};
use crate::models::{CellPos, DiagramConfig, Shape, COLOR_PALETTE};

/// Static palette and range information for building the control panel
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaletteInfo {
    pub shapes: Vec<Shape>,
    pub colors: Vec<String>,
    pub string_range: (u32, u32),
    pub fret_range: (u32, u32),
    pub start_fret_range: (u32, u32),
}

impl PaletteInfo {
    pub fn current() -> Self {
        use crate::models::config::{FRET_RANGE, START_FRET_RANGE, STRING_RANGE};
        Self {
            shapes: Shape::ALL.to_vec(),
            colors: COLOR_PALETTE.iter().map(|c| c.to_string()).collect(),
            string_range: (*STRING_RANGE.start(), *STRING_RANGE.end()),
            fret_range: (*FRET_RANGE.start(), *FRET_RANGE.end()),
            start_fret_range: (*START_FRET_RANGE.start(), *START_FRET_RANGE.end()),
        }
    }
}

/// Result of a config field update
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    /// Value actually stored after parsing and clamping
    pub value: u32,
    pub config: DiagramConfig,
    pub surface: Size,
}

/// A cell together with its pixel center
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CellHit {
    pub cell: CellPos,
    pub center: Point,
    /// Whether a marker currently occupies the cell
    pub occupied: bool,
}

/// Geometry summary for hosts that position their own overlays
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceInfo {
    pub surface: Size,
    pub settings: LayoutSettings,
}
