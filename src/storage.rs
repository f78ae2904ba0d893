//! Key-value persistence port.
//!
//! Widget state and the schedule cache persist through an injected store
//! rather than ambient globals; embedders bridge this to whatever storage
//! the host offers (browser local storage, a config file, a test map).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::timetable::{Schedule, TimetableError};
use crate::types::{GeoCoordinate, ScheduleDay};

/// Versioned key of the cached schedule entry.
pub const SCHEDULE_CACHE_KEY: &str = "ramadan_schedule_cache_v1";

/// String key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store for tests and embedders without host storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Cached schedule entry: the day list plus the context it was fetched in.
///
/// `timestamp` is milliseconds since the Unix epoch at write time. It is
/// recorded for embedders; nothing here expires entries by age.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSchedule {
    pub days: Vec<ScheduleDay>,
    pub coords: Option<GeoCoordinate>,
    pub city: Option<String>,
    pub timestamp: i64,
}

impl CachedSchedule {
    /// Re-validates the cached days into a usable schedule.
    pub fn schedule(&self) -> Result<Schedule, TimetableError> {
        Schedule::new(self.days.clone())
    }
}

/// Reads the cached schedule entry. Missing, corrupt or partial entries
/// come back as `None`; a broken cache is never an error.
pub fn read_schedule_cache(store: &impl KeyValueStore) -> Option<CachedSchedule> {
    let raw = store.get(SCHEDULE_CACHE_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Writes the cached schedule entry. Serialization failures are swallowed,
/// matching hosts where storage writes may not be available at all.
pub fn write_schedule_cache(store: &mut impl KeyValueStore, entry: &CachedSchedule) {
    if let Ok(raw) = serde_json::to_string(entry) {
        store.set(SCHEDULE_CACHE_KEY, raw);
    }
}
