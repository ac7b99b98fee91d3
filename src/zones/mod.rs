//! Timezone catalogue subsystem.
//!
//! Provides the validated zone catalogue, its region index, live
//! region-filtered views, and the coordinate resolver with its fallback.

pub mod catalogue;
pub mod dataset;
pub mod filter;
pub mod geo;
pub mod regions;
pub mod resolver;
pub mod types;

pub use catalogue::Catalogue;
pub use filter::RegionFilterView;
pub use geo::{format_coords, haversine_km, EARTH_RADIUS_KM};
pub use regions::RegionIndex;
pub use resolver::TimezoneResolver;
pub use types::{CatalogueError, DatasetError, RegionRow, ZoneRecord, ZoneRow};
