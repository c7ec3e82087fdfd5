//! Diagram configuration (string count, fret count, start fret)
//!
//! Values arrive from numeric input widgets as raw text. Parsing never fails:
//! unparseable text falls back to the field minimum and everything else is
//! clamped into the field's range, so a diagram always has at least one
//! string and one fret.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::EditorError;

pub const STRING_RANGE: RangeInclusive<u32> = 1..=12;
pub const FRET_RANGE: RangeInclusive<u32> = 1..=24;
pub const START_FRET_RANGE: RangeInclusive<u32> = 1..=24;

/// Board dimensions and the first visible fret
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
    pub string_count: u32,
    pub fret_count: u32,

    /// Absolute fret number of the leftmost visible column (1 = nut visible)
    pub start_fret: u32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            string_count: 6,
            fret_count: 5,
            start_fret: 1,
        }
    }
}

impl DiagramConfig {
    pub fn new(string_count: u32, fret_count: u32, start_fret: u32) -> Self {
        Self {
            string_count: clamp_to(string_count as i64, &STRING_RANGE),
            fret_count: clamp_to(fret_count as i64, &FRET_RANGE),
            start_fret: clamp_to(start_fret as i64, &START_FRET_RANGE),
        }
    }

    /// True when the diagram begins at the nut
    pub fn shows_nut(&self) -> bool {
        self.start_fret == 1
    }

    /// Lowest reachable fret column (the open-string slot only exists at the nut)
    pub fn min_fret_index(&self) -> i32 {
        if self.shows_nut() {
            crate::models::OPEN_STRING
        } else {
            0
        }
    }

    pub fn max_fret_index(&self) -> i32 {
        self.fret_count as i32 - 1
    }

    pub fn max_string_index(&self) -> u32 {
        self.string_count - 1
    }

    /// Absolute fret number printed under a visible column
    pub fn fret_number(&self, column: u32) -> u32 {
        self.start_fret + column
    }

    /// Apply raw widget input to one field, returning the stored value
    pub fn set_field(&mut self, field: ConfigField, raw: &str) -> u32 {
        let value = parse_clamped(raw, &field.range());
        match field {
            ConfigField::Strings => self.string_count = value,
            ConfigField::Frets => self.fret_count = value,
            ConfigField::StartFret => self.start_fret = value,
        }
        log::debug!("config {} <- {:?} => {}", field.name(), raw, value);
        value
    }

    pub fn get_field(&self, field: ConfigField) -> u32 {
        match field {
            ConfigField::Strings => self.string_count,
            ConfigField::Frets => self.fret_count,
            ConfigField::StartFret => self.start_fret,
        }
    }
}

/// The three numeric inputs of the control panel
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    Strings,
    Frets,
    StartFret,
}

impl ConfigField {
    pub const ALL: [ConfigField; 3] = [ConfigField::Strings, ConfigField::Frets, ConfigField::StartFret];

    /// Input `name` attribute and API identifier
    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::Strings => "strings",
            ConfigField::Frets => "frets",
            ConfigField::StartFret => "startFret",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Strings => "Number of Strings",
            ConfigField::Frets => "Number of Frets",
            ConfigField::StartFret => "Starting Fret",
        }
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            ConfigField::Strings => STRING_RANGE,
            ConfigField::Frets => FRET_RANGE,
            ConfigField::StartFret => START_FRET_RANGE,
        }
    }
}

impl FromStr for ConfigField {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| EditorError::UnknownConfigField(s.to_string()))
    }
}

/// Parse widget text, falling back to the range minimum on garbage
pub fn parse_clamped(raw: &str, range: &RangeInclusive<u32>) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) => clamp_to(v, range),
        // Accept "3.0"-style input from number widgets
        Err(_) => match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => clamp_to(v.trunc() as i64, range),
            _ => *range.start(),
        },
    }
}

fn clamp_to(value: i64, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start() as i64, *range.end() as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiagramConfig::default();
        assert_eq!(config.string_count, 6);
        assert_eq!(config.fret_count, 5);
        assert_eq!(config.start_fret, 1);
        assert!(config.shows_nut());
        assert_eq!(config.min_fret_index(), -1);
    }

    #[test]
    fn test_set_field_clamps_to_range() {
        let mut config = DiagramConfig::default();
        assert_eq!(config.set_field(ConfigField::Strings, "40"), 12);
        assert_eq!(config.set_field(ConfigField::Frets, "0"), 1);
        assert_eq!(config.set_field(ConfigField::StartFret, "-3"), 1);
        assert_eq!(config.set_field(ConfigField::StartFret, "7"), 7);
        assert_eq!(config, DiagramConfig { string_count: 12, fret_count: 1, start_fret: 7 });
    }

    #[test]
    fn test_malformed_input_falls_back_to_minimum() {
        let mut config = DiagramConfig::default();
        assert_eq!(config.set_field(ConfigField::Strings, ""), 1);
        assert_eq!(config.set_field(ConfigField::Frets, "abc"), 1);
        assert_eq!(config.set_field(ConfigField::Frets, " 4 "), 4);
        assert_eq!(config.set_field(ConfigField::Frets, "4.9"), 4);
    }

    #[test]
    fn test_start_fret_moves_open_string_slot() {
        let mut config = DiagramConfig::default();
        config.set_field(ConfigField::StartFret, "5");
        assert!(!config.shows_nut());
        assert_eq!(config.min_fret_index(), 0);
        assert_eq!(config.fret_number(2), 7);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ConfigField::ALL {
            assert_eq!(field.name().parse::<ConfigField>().unwrap(), field);
        }
        assert!("capo".parse::<ConfigField>().is_err());
    }
}
