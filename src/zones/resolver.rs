//! Timezone resolver: nearest zone for a coordinate, or a guaranteed default.
//!
//! Coordinate flow:  catalogue nearest match → fallback (empty catalogue only)
//! Name flow:        catalogue exact match → not found

use super::catalogue::Catalogue;
use super::types::ZoneRecord;

/// The record returned when the catalogue has nothing to search:
/// America/New_York at its `zone.tab` anchor.
pub const FALLBACK_REGION: &str = "America";
pub const FALLBACK_ZONE: &str = "New_York";
const FALLBACK_COUNTRY: &str = "US";
const FALLBACK_LAT: f64 = 40.71;
const FALLBACK_LON: f64 = -74.01;

pub fn fallback_record() -> ZoneRecord {
    ZoneRecord::new(FALLBACK_REGION, FALLBACK_ZONE, FALLBACK_COUNTRY, FALLBACK_LAT, FALLBACK_LON)
}

/// Facade over a borrowed catalogue.
pub struct TimezoneResolver<'a> {
    catalogue: &'a Catalogue,
    fallback: ZoneRecord,
}

impl<'a> TimezoneResolver<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            catalogue,
            fallback: fallback_record(),
        }
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    pub fn fallback(&self) -> &ZoneRecord {
        &self.fallback
    }

    /// The nearest zone. Never fails: an empty catalogue yields the fallback.
    pub fn resolve(&self, latitude: f64, longitude: f64) -> &ZoneRecord {
        match self.catalogue.find_nearest(latitude, longitude) {
            Some(r) => r,
            None => {
                tracing::warn!(
                    latitude,
                    longitude,
                    fallback = %self.fallback,
                    "zone catalogue is empty, using fallback zone"
                );
                &self.fallback
            }
        }
    }

    /// Exact lookup by name. No fallback; use `resolve` for a guaranteed result.
    pub fn lookup_by_name(&self, region: &str, zone: &str) -> Option<&'a ZoneRecord> {
        self.catalogue.find_exact(region, zone)
    }
}
