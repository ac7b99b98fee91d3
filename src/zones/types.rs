//! Core types for the zone catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One catalogue row: a named zone anchored at a point on the globe.
///
/// `(region, zone)` is the record's identity. The catalogue guarantees it
/// is unique and that the coordinates are in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    region: String,
    zone: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl ZoneRecord {
    pub fn new(
        region: impl Into<String>,
        zone: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            region: region.into(),
            zone: zone.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// The zone key, unique within its region.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Human-readable label: "Argentina/Buenos_Aires" → "Argentina/Buenos Aires".
    pub fn display_text(&self) -> String {
        humanize(&self.zone)
    }

    /// The full identifier, e.g. "Europe/Berlin".
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.region, self.zone)
    }
}

impl fmt::Display for ZoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.region, self.zone)
    }
}

pub(crate) fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

/// Per-row projection of a region-filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRow {
    /// Display text.
    pub name: String,
    /// The zone key; round-trips into `Catalogue::find_exact` with `region`.
    pub key: String,
    pub region: String,
}

impl From<&ZoneRecord> for ZoneRow {
    fn from(record: &ZoneRecord) -> Self {
        Self {
            name: record.display_text(),
            key: record.zone.clone(),
            region: record.region.clone(),
        }
    }
}

/// Per-row projection of the region index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRow {
    pub name: String,
    pub key: String,
}

impl RegionRow {
    pub fn new(key: &str) -> Self {
        Self {
            name: humanize(key),
            key: key.to_string(),
        }
    }
}

/// Catalogue construction errors. Each identifies the offending record.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogueError {
    #[error("duplicate zone '{region}/{zone}' at rows {first} and {second}")]
    DuplicateZone {
        region: String,
        zone: String,
        first: usize,
        second: usize,
    },

    #[error("zone '{region}/{zone}' has latitude {latitude} outside -90..90")]
    LatitudeOutOfRange {
        region: String,
        zone: String,
        latitude: f64,
    },

    #[error("zone '{region}/{zone}' has longitude {longitude} outside -180..180")]
    LongitudeOutOfRange {
        region: String,
        zone: String,
        longitude: f64,
    },

    #[error("row {index} has an empty region or zone key")]
    EmptyKey { index: usize },
}

/// Errors loading an external dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalogue: {0}")]
    Catalogue(#[from] CatalogueError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_replaces_underscores() {
        let r = ZoneRecord::new("America", "Argentina/Buenos_Aires", "AR", -34.6, -58.45);
        assert_eq!(r.display_text(), "Argentina/Buenos Aires");
        assert_eq!(r.to_string(), "America/Argentina/Buenos_Aires");
    }

    #[test]
    fn test_zone_row_projection() {
        let r = ZoneRecord::new("America", "New_York", "US", 40.71, -74.0);
        let row = ZoneRow::from(&r);
        assert_eq!(row.name, "New York");
        assert_eq!(row.key, "New_York");
        assert_eq!(row.region, "America");
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{"region":"Europe","zone":"Oslo","country":"NO","latitude":59.92,"longitude":10.75}"#;
        let r: ZoneRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.identifier(), "Europe/Oslo");
        assert_eq!(r.country(), "NO");
    }

    #[test]
    fn test_error_names_record() {
        let e = CatalogueError::LatitudeOutOfRange {
            region: "Europe".into(),
            zone: "Nowhere".into(),
            latitude: 91.0,
        };
        assert!(e.to_string().contains("Europe/Nowhere"));
    }
}
