//! Process-wide key-value store for passing data between stages.
//!
//! There is only convention about keys; the zone keys this crate writes
//! are [`LOCATION_REGION_KEY`] and [`LOCATION_ZONE_KEY`].
//!
//! Every insert and every remove notifies observers, even when nothing
//! changed (re-inserting the same value, removing a missing key).

pub mod selection;

use crate::signal::{Signal, SubscriptionId};
use crate::zones::ZoneRecord;
use serde_json::Value;
use std::collections::BTreeMap;

pub use selection::{Selection, SelectionFile, SelectionSource};

pub const LOCATION_REGION_KEY: &str = "locationRegion";
pub const LOCATION_ZONE_KEY: &str = "locationZone";

/// The mutation that triggered a change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageEvent {
    Inserted(String),
    Removed(String),
}

#[derive(Debug, Default)]
pub struct GlobalStorage {
    data: BTreeMap<String, Value>,
    changed: Signal<StorageEvent>,
}

impl GlobalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Always notifies.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.data.insert(key.to_string(), value.into());
        tracing::debug!(key, "storage insert");
        self.changed.emit(&StorageEvent::Inserted(key.to_string()));
    }

    /// Remove `key` if present. Always notifies. Returns the number of keys left.
    pub fn remove(&mut self, key: &str) -> usize {
        self.data.remove(key);
        tracing::debug!(key, "storage remove");
        self.changed.emit(&StorageEvent::Removed(key.to_string()));
        self.data.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StorageEvent) + 'static,
    {
        self.changed.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Write every key and value to the debug log.
    pub fn debug_dump(&self) {
        for (k, v) in &self.data {
            tracing::debug!(key = %k, value = %v, "storage entry");
        }
    }
}

/// Publish a chosen zone's identity for later stages.
pub fn publish_zone(storage: &mut GlobalStorage, record: &ZoneRecord) {
    storage.insert(LOCATION_REGION_KEY, record.region());
    storage.insert(LOCATION_ZONE_KEY, record.zone());
}

/// Read back a zone identity previously written by [`publish_zone`].
pub fn published_zone(storage: &GlobalStorage) -> Option<(String, String)> {
    let region = storage.value(LOCATION_REGION_KEY)?.as_str()?;
    let zone = storage.value(LOCATION_ZONE_KEY)?.as_str()?;
    Some((region.to_string(), zone.to_string()))
}
