//! Zonefinder: a timezone catalogue with nearest-zone lookup.
//!
//! The catalogue is built once from a static dataset and then shared
//! read-only by the region index, region-filtered views and the resolver.

pub mod server;
pub mod signal;
pub mod storage;
pub mod zones;
