//! The list of timezone regions.
//!
//! Regions are the coarse areas (Africa, America, Europe ..) that contain
//! zones. Order is first appearance in the catalogue.

use super::catalogue::Catalogue;
use super::types::RegionRow;

#[derive(Debug, Clone)]
pub struct RegionIndex<'a> {
    regions: Vec<&'a str>,
}

impl<'a> RegionIndex<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        let mut regions: Vec<&'a str> = Vec::new();
        for r in catalogue {
            // Region counts are tiny, a linear check is fine.
            if !regions.contains(&r.region()) {
                regions.push(r.region());
            }
        }
        Self { regions }
    }

    pub fn regions(&self) -> &[&'a str] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.regions.iter().copied()
    }

    /// Display name and key for each region.
    pub fn rows(&self) -> Vec<RegionRow> {
        self.regions.iter().map(|r| RegionRow::new(r)).collect()
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.iter().any(|r| *r == region)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
