//! The last selected zone, persisted at ~/.zonefinder/selection.json.
//!
//! Lets the selection made by one command be read back by later ones.
//! A missing or unreadable file reads as "nothing selected".

use super::{publish_zone, GlobalStorage};
use crate::zones::{Catalogue, ZoneRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How the selection was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionSource {
    /// Nearest zone to a coordinate.
    Nearest,
    /// Chosen by name.
    Manual,
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    pub zone: String,
    pub source: SelectionSource,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl Selection {
    /// Re-resolve against a catalogue. `None` if the zone is no longer listed.
    pub fn record<'a>(&self, catalogue: &'a Catalogue) -> Option<&'a ZoneRecord> {
        catalogue.find_exact(&self.region, &self.zone)
    }
}

pub struct SelectionFile {
    path: PathBuf,
    current: Option<Selection>,
}

impl SelectionFile {
    /// Load from the default location (~/.zonefinder/selection.json).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load from a specific path (for testing).
    pub fn load_from(path: PathBuf) -> Self {
        let current = Self::read_file(&path);
        Self { path, current }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".zonefinder")
            .join("selection.json")
    }

    fn read_file(path: &Path) -> Option<Selection> {
        let data = match fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read selection file");
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt selection file");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Record a selection and persist it.
    pub fn put(&mut self, record: &ZoneRecord, source: SelectionSource) -> io::Result<()> {
        let selection = Selection {
            region: record.region().to_string(),
            zone: record.zone().to_string(),
            source,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        self.current = Some(selection);
        self.persist()
    }

    /// Publish the stored selection into `storage`, if it still names a
    /// catalogue zone. Returns the record published.
    pub fn restore_into<'a>(
        &self,
        catalogue: &'a Catalogue,
        storage: &mut GlobalStorage,
    ) -> Option<&'a ZoneRecord> {
        let record = self.current.as_ref()?.record(catalogue)?;
        publish_zone(storage, record);
        Some(record)
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.current)?;
        fs::write(&self.path, json)
    }
}
