//! The static country geocode table.
//!
//! Loaded once at startup from a JSON array of
//! `{name, country, latitude, longitude}` rows and keyed by display
//! name. Country selection events carry the display name; the table
//! maps it to the ISO code and fly-to center.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::geo::LngLat;

/// One geocode row: a country's display name, ISO-2 code, and centroid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryGeocodeEntry {
    /// Display name used by selection events, e.g. `"Egypt"`.
    pub name: String,
    /// ISO-2 country code, e.g. `"EG"`.
    #[serde(rename = "country")]
    pub iso_code: String,
    /// Centroid latitude in degrees.
    pub latitude: f64,
    /// Centroid longitude in degrees.
    pub longitude: f64,
}

impl CountryGeocodeEntry {
    /// Fly-to center for this country.
    pub fn center(&self) -> LngLat {
        LngLat::new(self.longitude, self.latitude)
    }
}

/// Errors building the geocode table.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The source JSON could not be parsed.
    #[error("Failed to parse geocode table: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two rows share a display name; names must be unique keys.
    #[error("Duplicate geocode entry for country name {0:?}")]
    DuplicateName(String),
}

/// The name-keyed geocode lookup table.
#[derive(Debug, Clone, Default)]
pub struct GeocodeTable {
    by_name: BTreeMap<String, CountryGeocodeEntry>,
}

impl GeocodeTable {
    /// Build a table from parsed rows, rejecting duplicate names.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CountryGeocodeEntry>,
    ) -> Result<Self, GeocodeError> {
        let mut by_name = BTreeMap::new();
        for entry in entries {
            let name = entry.name.clone();
            if by_name.insert(name.clone(), entry).is_some() {
                return Err(GeocodeError::DuplicateName(name));
            }
        }
        Ok(Self { by_name })
    }

    /// Parse a JSON array of geocode rows into a table.
    pub fn parse(json: &str) -> Result<Self, GeocodeError> {
        let entries: Vec<CountryGeocodeEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Look up a country by display name.
    pub fn lookup(&self, name: &str) -> Option<&CountryGeocodeEntry> {
        self.by_name.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All entries in display-name order, for populating a selector UI.
    pub fn entries(&self) -> impl Iterator<Item = &CountryGeocodeEntry> {
        self.by_name.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Egypt", "country": "EG", "latitude": 26.8, "longitude": 30.8},
        {"name": "Libya", "country": "LY", "latitude": 26.3, "longitude": 17.2}
    ]"#;

    #[test]
    fn test_parse_and_lookup() {
        let table = GeocodeTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);

        let egypt = table.lookup("Egypt").unwrap();
        assert_eq!(egypt.iso_code, "EG");
        assert_eq!(egypt.center(), LngLat::new(30.8, 26.8));
    }

    #[test]
    fn test_lookup_missing_name() {
        let table = GeocodeTable::parse(SAMPLE).unwrap();
        assert!(table.lookup("Atlantis").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let json = r#"[
            {"name": "Egypt", "country": "EG", "latitude": 26.8, "longitude": 30.8},
            {"name": "Egypt", "country": "XX", "latitude": 0.0, "longitude": 0.0}
        ]"#;
        match GeocodeTable::parse(json) {
            Err(GeocodeError::DuplicateName(name)) => assert_eq!(name, "Egypt"),
            other => panic!("expected duplicate-name error, got {other:?}"),
        }
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let table = GeocodeTable::parse(SAMPLE).unwrap();
        let names: Vec<&str> = table.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Egypt", "Libya"]);
    }
}
