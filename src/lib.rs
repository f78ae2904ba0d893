//! # Imsakiyah
//!
//! A Ramadan fasting timetable engine: resolves a live countdown against a
//! daily sahur/iftar schedule, caches fetched schedules through an injected
//! key-value port, and carries the devotional trackers of a fasting
//! companion app.
//!
//! ## Modules
//!
//! - `types`: Core types (Phase, ScheduleDay, CountdownStatus, etc.)
//! - `timetable`: Schedule validation, 12-hour clock parsing, placeholders
//! - `countdown`: The pure schedule-relative countdown resolver
//! - `hijri`: Hijri calendar labels for generated schedules
//! - `storage`: Key-value persistence port and schedule cache
//! - `devotions`: Tasbih, deeds checklist, Zakat and friends
//! - `network`: Schedule fetch and reverse geocoding (optional)
//!
//! ## Usage
//!
//! ```rust
//! use imsakiyah::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
//! let schedule = Schedule::placeholder(start, 30).unwrap();
//!
//! let noon = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let status = imsakiyah::resolve(&schedule, noon);
//!
//! assert!(status.phase.is_awaiting_iftar());
//! assert!(status.progress_percent > 0.0);
//! ```

pub mod countdown;
pub mod devotions;
pub mod extension;
pub mod hijri;
#[cfg(feature = "async")]
pub mod network;
pub mod storage;
pub mod timetable;
pub mod types;

pub use countdown::resolve;
pub use extension::FastingClockExt;
pub use hijri::{hijri_label, to_hijri};
pub use storage::{KeyValueStore, MemoryStore};
pub use timetable::{format_clock_12h, parse_clock_12h, Schedule, TimetableError};
pub use types::{CountdownStatus, GeoCoordinate, Phase, ScheduleDay, TimeLeft};

pub mod prelude {
    pub use crate::extension::FastingClockExt;
    pub use crate::resolve;
    pub use crate::storage::{KeyValueStore, MemoryStore};
    pub use crate::timetable::{format_clock_12h, parse_clock_12h, Schedule, TimetableError};
    pub use crate::types::*;
}
