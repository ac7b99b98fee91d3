//! The zone catalogue: validated once, then frozen.

use super::dataset;
use super::geo::{haversine_km, valid_latitude, valid_longitude};
use super::regions::RegionIndex;
use super::types::{CatalogueError, DatasetError, ZoneRecord};
use std::collections::HashMap;
use std::path::Path;

/// The complete, immutable, ordered set of zone records.
///
/// Iteration order is insertion order and is the order every derived view
/// presents.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    records: Vec<ZoneRecord>,
    /// region → zone → row index
    index: HashMap<String, HashMap<String, usize>>,
}

impl Catalogue {
    /// Validate and freeze a record sequence.
    ///
    /// Fails on the first duplicate `(region, zone)`, empty key, or
    /// out-of-range coordinate.
    pub fn build<I>(records: I) -> Result<Self, CatalogueError>
    where
        I: IntoIterator<Item = ZoneRecord>,
    {
        let records: Vec<ZoneRecord> = records.into_iter().collect();
        let mut index: HashMap<String, HashMap<String, usize>> = HashMap::new();

        for (i, r) in records.iter().enumerate() {
            if r.region().is_empty() || r.zone().is_empty() {
                return Err(CatalogueError::EmptyKey { index: i });
            }
            if !valid_latitude(r.latitude()) {
                return Err(CatalogueError::LatitudeOutOfRange {
                    region: r.region().to_string(),
                    zone: r.zone().to_string(),
                    latitude: r.latitude(),
                });
            }
            if !valid_longitude(r.longitude()) {
                return Err(CatalogueError::LongitudeOutOfRange {
                    region: r.region().to_string(),
                    zone: r.zone().to_string(),
                    longitude: r.longitude(),
                });
            }

            let zones = index.entry(r.region().to_string()).or_default();
            if let Some(&first) = zones.get(r.zone()) {
                return Err(CatalogueError::DuplicateZone {
                    region: r.region().to_string(),
                    zone: r.zone().to_string(),
                    first,
                    second: i,
                });
            }
            zones.insert(r.zone().to_string(), i);
        }

        tracing::info!(zones = records.len(), regions = index.len(), "zone catalogue built");
        Ok(Self { records, index })
    }

    /// The compiled-in dataset.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::build(dataset::builtin_records())
    }

    /// Load a JSON dataset file and build from it.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let records = dataset::load_records(path)?;
        tracing::debug!(path = %path.display(), rows = records.len(), "loaded dataset file");
        Ok(Self::build(records)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ZoneRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZoneRecord> {
        self.records.iter()
    }

    /// The distinct regions, in first-seen order.
    pub fn regions(&self) -> RegionIndex<'_> {
        RegionIndex::new(self)
    }

    /// Exact, case-sensitive match on both keys.
    pub fn find_exact(&self, region: &str, zone: &str) -> Option<&ZoneRecord> {
        let i = *self.index.get(region)?.get(zone)?;
        self.records.get(i)
    }

    /// The record closest to the point by great-circle distance.
    ///
    /// `None` only for an empty catalogue. Exact ties go to the earliest row.
    pub fn find_nearest(&self, latitude: f64, longitude: f64) -> Option<&ZoneRecord> {
        self.nearest_with_distance(latitude, longitude).map(|(r, _)| r)
    }

    /// Like [`find_nearest`](Self::find_nearest), also returning the distance in km.
    pub fn nearest_with_distance(&self, latitude: f64, longitude: f64) -> Option<(&ZoneRecord, f64)> {
        let mut best: Option<(&ZoneRecord, f64)> = None;
        for r in &self.records {
            let d = haversine_km(latitude, longitude, r.latitude(), r.longitude());
            // Strict `<` keeps the first of equal candidates.
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((r, d));
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a ZoneRecord;
    type IntoIter = std::slice::Iter<'a, ZoneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::zones::geo::EARTH_RADIUS_KM;
    use std::fs;
    use tempfile::TempDir;

    fn rec(region: &str, zone: &str, lat: f64, lon: f64) -> ZoneRecord {
        ZoneRecord::new(region, zone, "XX", lat, lon)
    }

    fn scenario() -> Catalogue {
        Catalogue::build(vec![
            ZoneRecord::new("Europe", "Berlin", "DE", 52.52, 13.40),
            ZoneRecord::new("Europe", "Paris", "FR", 48.85, 2.35),
            ZoneRecord::new("America", "New_York", "US", 40.71, -74.00),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Catalogue::build(vec![
            rec("R1", "z1", 0.0, 0.0),
            rec("R2", "z1", 1.0, 1.0),
            rec("R1", "z1", 2.0, 2.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogueError::DuplicateZone {
                region: "R1".into(),
                zone: "z1".into(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn test_same_zone_in_different_regions_ok() {
        let cat = Catalogue::build(vec![rec("R1", "z", 0.0, 0.0), rec("R2", "z", 0.0, 0.0)]).unwrap();
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let lat = Catalogue::build(vec![rec("R", "north", 90.5, 0.0)]).unwrap_err();
        assert!(matches!(lat, CatalogueError::LatitudeOutOfRange { .. }));

        let lon = Catalogue::build(vec![rec("R", "east", 0.0, 180.01)]).unwrap_err();
        assert!(matches!(lon, CatalogueError::LongitudeOutOfRange { .. }));

        let nan = Catalogue::build(vec![rec("R", "nan", f64::NAN, 0.0)]).unwrap_err();
        assert!(matches!(nan, CatalogueError::LatitudeOutOfRange { .. }));
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        let cat = Catalogue::build(vec![rec("R", "a", -90.0, -180.0), rec("R", "b", 90.0, 180.0)]);
        assert!(cat.is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = Catalogue::build(vec![rec("R", "a", 0.0, 0.0), rec("", "b", 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, CatalogueError::EmptyKey { index: 1 });
    }

    #[test]
    fn test_builtin_builds() {
        let cat = Catalogue::builtin().unwrap();
        assert!(cat.len() > 100);
    }

    #[test]
    fn test_exact_lookup_round_trip() {
        let cat = Catalogue::builtin().unwrap();
        for r in &cat {
            assert_eq!(cat.find_exact(r.region(), r.zone()), Some(r));
        }
    }

    #[test]
    fn test_exact_lookup_is_case_sensitive() {
        let cat = scenario();
        assert!(cat.find_exact("Europe", "Paris").is_some());
        assert!(cat.find_exact("europe", "paris").is_none());
        assert!(cat.find_exact("Europe", "Madrid").is_none());
        assert!(cat.find_exact("America", "Berlin").is_none());
    }

    #[test]
    fn test_nearest_empty_is_none() {
        let cat = Catalogue::build(Vec::new()).unwrap();
        assert!(cat.find_nearest(10.0, 10.0).is_none());
    }

    #[test]
    fn test_nearest_along_sphere() {
        let cat = Catalogue::build(vec![
            rec("R", "A", 0.0, 0.0),
            rec("R", "B", 0.0, 90.0),
            rec("R", "C", 0.0, -90.0),
        ])
        .unwrap();
        assert_eq!(cat.find_nearest(0.0, 60.0).unwrap().zone(), "B");
        // A and B are both 45° from (0, 45); C is 135° away.
        assert_ne!(cat.find_nearest(0.0, 45.0).unwrap().zone(), "C");
    }

    #[test]
    fn test_nearest_at_antimeridian() {
        let cat = Catalogue::build(vec![rec("R", "A", 0.0, 179.0), rec("R", "B", 0.0, -179.0)]).unwrap();
        let da = haversine_km(0.0, 180.0, 0.0, 179.0);
        let db = haversine_km(0.0, 180.0, 0.0, -179.0);
        let expected = if da <= db { "A" } else { "B" };

        let (found, d) = cat.nearest_with_distance(0.0, 180.0).unwrap();
        assert_eq!(found.zone(), expected);
        // About 1° of arc, not 358°.
        assert_relative_eq!(d, EARTH_RADIUS_KM * 1.0_f64.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn test_nearest_wraps_seam() {
        // Flat degrees would pick C (9.5 apart) over A (358.5 apart).
        let cat = Catalogue::build(vec![rec("R", "C", 0.0, 170.0), rec("R", "A", 0.0, -179.0)]).unwrap();
        assert_eq!(cat.find_nearest(0.0, 179.5).unwrap().zone(), "A");
    }

    #[test]
    fn test_nearest_tie_goes_to_first_row() {
        let cat = Catalogue::build(vec![
            rec("R", "far", 10.0, 10.0),
            rec("R", "first", 45.0, 7.0),
            rec("R", "second", 45.0, 7.0),
        ])
        .unwrap();
        for _ in 0..10 {
            assert_eq!(cat.find_nearest(45.0, 7.0).unwrap().zone(), "first");
        }
    }

    #[test]
    fn test_builtin_south_pole() {
        // Near the pole longitude barely matters: Vostok (78.4°S) beats
        // Troll (72°S), even though Troll is closer in raw longitude.
        let cat = Catalogue::builtin().unwrap();
        assert_eq!(cat.find_nearest(-89.9, 0.0).unwrap().identifier(), "Antarctica/Vostok");
    }

    #[test]
    fn test_builtin_across_seam() {
        let cat = Catalogue::builtin().unwrap();
        assert_eq!(cat.find_nearest(-18.0, -179.9).unwrap().identifier(), "Pacific/Fiji");
    }

    #[test]
    fn test_builtin_north() {
        let cat = Catalogue::builtin().unwrap();
        assert_eq!(cat.find_nearest(89.9, -120.0).unwrap().identifier(), "Arctic/Longyearbyen");
    }

    #[test]
    fn test_scenario_nearest() {
        let cat = scenario();
        assert_eq!(cat.find_nearest(48.0, 2.0).unwrap().zone(), "Paris");
        assert_eq!(cat.find_nearest(41.0, -73.0).unwrap().zone(), "New_York");
    }

    #[test]
    fn test_from_path_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zones.json");
        fs::write(
            &path,
            r#"[
                {"region":"Europe","zone":"Oslo","country":"NO","latitude":59.92,"longitude":10.75},
                {"region":"Europe","zone":"Oslo","country":"NO","latitude":59.92,"longitude":10.75}
            ]"#,
        )
        .unwrap();
        let err = Catalogue::from_path(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Catalogue(CatalogueError::DuplicateZone { .. })));
    }
}
