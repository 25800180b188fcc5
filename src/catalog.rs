//! Destination catalog loading
//!
//! The catalog is a JSON document with a top-level `cities` object keyed by
//! city name:
//!
//! ```json
//! { "cities": { "Bangkok": { "country": "Thailand", "climate": "tropical",
//!                            "temps": { "1": [22, 32], "2": [24, 33] } } } }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::models::{ClimateClass, Destination, TempRange};
use crate::{PackGenError, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    cities: BTreeMap<String, CityEntry>,
}

#[derive(Debug, Deserialize)]
struct CityEntry {
    country: String,
    climate: ClimateClass,
    temps: BTreeMap<u32, TempRange>,
}

/// Destinations loaded once per run, read-only afterwards
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Load the catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading destination catalog from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|e| {
            PackGenError::catalog(format!("cannot read {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&raw)?;

        debug!("Loaded {} destinations", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)
            .map_err(|e| PackGenError::catalog(format!("malformed catalog: {e}")))?;

        let destinations: Vec<Destination> = file
            .cities
            .into_iter()
            .map(|(name, entry)| Destination {
                name,
                country: entry.country,
                climate: entry.climate,
                temps: entry.temps,
            })
            .collect();

        Self::from_destinations(destinations)
    }

    /// Build a catalog from already constructed destinations
    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self> {
        if destinations.is_empty() {
            return Err(PackGenError::catalog("catalog contains no destinations"));
        }
        Ok(Self { destinations })
    }

    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "cities": {
            "Bangkok": {
                "country": "Thailand",
                "climate": "tropical",
                "temps": { "1": [22, 32], "7": [26.5, 33] }
            },
            "Oslo": {
                "country": "Norway",
                "climate": "continental",
                "temps": { "1": [-7, -2] }
            }
        }
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = DestinationCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let bangkok = catalog.get("Bangkok").unwrap();
        assert_eq!(bangkok.country, "Thailand");
        assert_eq!(bangkok.climate, ClimateClass::Tropical);
        assert_eq!(bangkok.temp_range(7).unwrap().min, 26.5);

        let oslo = catalog.get("Oslo").unwrap();
        assert_eq!(oslo.temp_range(1).unwrap().average(), -4.5);
        assert!(oslo.temp_range(6).is_err());
    }

    #[test]
    fn test_malformed_catalog() {
        let err = DestinationCatalog::from_json_str("{\"cities\": [1, 2]}").unwrap_err();
        assert!(matches!(err, PackGenError::Catalog { .. }));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_missing_cities_key() {
        assert!(DestinationCatalog::from_json_str("{}").is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let err = DestinationCatalog::from_json_str("{\"cities\": {}}").unwrap_err();
        assert!(err.to_string().contains("no destinations"));
    }

    #[test]
    fn test_missing_file() {
        let err = DestinationCatalog::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, PackGenError::Catalog { .. }));
    }
}
