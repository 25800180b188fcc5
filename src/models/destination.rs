//! Destination model: climate class and monthly temperature ranges

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{PackGenError, Result};

/// Climate tag attached to a destination
///
/// Only `Tropical` and `Desert` add extra items to a packing list; every other
/// class, including tags the catalog invents, contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateClass {
    Tropical,
    Desert,
    Temperate,
    Mediterranean,
    Continental,
    Polar,
    #[serde(other)]
    Other,
}

impl ClimateClass {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateClass::Tropical => "tropical",
            ClimateClass::Desert => "desert",
            ClimateClass::Temperate => "temperate",
            ClimateClass::Mediterranean => "mediterranean",
            ClimateClass::Continental => "continental",
            ClimateClass::Polar => "polar",
            ClimateClass::Other => "other",
        }
    }
}

impl fmt::Display for ClimateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly temperature range in Celsius, stored in the catalog as `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct TempRange {
    pub min: f64,
    pub max: f64,
}

impl TempRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl From<[f64; 2]> for TempRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<TempRange> for [f64; 2] {
    fn from(range: TempRange) -> Self {
        [range.min, range.max]
    }
}

/// A travel destination loaded from the catalog
///
/// Immutable after loading; shared read-only by every record generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// City name (the catalog key)
    pub name: String,
    pub country: String,
    pub climate: ClimateClass,
    /// Month number (1-12) to temperature range
    pub temps: BTreeMap<u32, TempRange>,
}

impl Destination {
    /// Temperature range for a month, failing when the catalog lacks it
    pub fn temp_range(&self, month: u32) -> Result<&TempRange> {
        self.temps.get(&month).ok_or_else(|| {
            PackGenError::catalog(format!(
                "no temperature range for month {month} at {}",
                self.name
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lisbon() -> Destination {
        let mut temps = BTreeMap::new();
        temps.insert(1, TempRange::new(8.0, 15.0));
        temps.insert(7, TempRange::new(18.0, 28.0));
        Destination {
            name: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            climate: ClimateClass::Mediterranean,
            temps,
        }
    }

    #[test]
    fn test_temp_range_average() {
        assert_eq!(TempRange::new(18.0, 28.0).average(), 23.0);
        assert_eq!(TempRange::new(-5.0, 2.0).average(), -1.5);
    }

    #[test]
    fn test_temp_range_lookup() {
        let dest = lisbon();
        assert_eq!(dest.temp_range(7).unwrap().max, 28.0);

        let err = dest.temp_range(3).unwrap_err();
        assert!(matches!(err, PackGenError::Catalog { .. }));
        assert!(err.to_string().contains("month 3"));
    }

    #[test]
    fn test_climate_class_unknown_tag() {
        let climate: ClimateClass = serde_json::from_str("\"subarctic\"").unwrap();
        assert_eq!(climate, ClimateClass::Other);

        let climate: ClimateClass = serde_json::from_str("\"tropical\"").unwrap();
        assert_eq!(climate, ClimateClass::Tropical);
    }

    #[test]
    fn test_temp_range_from_array() {
        let range: TempRange = serde_json::from_str("[12, 21.5]").unwrap();
        assert_eq!(range, TempRange::new(12.0, 21.5));
    }
}
