//! Timetable model: 12-hour clock parsing, schedule validation and the
//! offline placeholder generator.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ScheduleDay;

/// Shown when reverse geocoding yields nothing usable.
pub const DEFAULT_LOCATION_LABEL: &str = "Your Location";

/// Sahur/iftar wall-clock times used by generated placeholder schedules.
pub const PLACEHOLDER_SAHUR: (u32, u32) = (5, 15);
pub const PLACEHOLDER_IFTAR: (u32, u32) = (18, 30);

/// Errors from imsakiyah operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimetableError {
    /// Clock time string that is not a 12-hour `H:MM AM/PM` value.
    #[error("unrecognized clock time {input:?}")]
    MalformedTime { input: String },

    /// Calendar date string that is not a `YYYY-MM-DD` value.
    #[error("unrecognized calendar date {input:?}")]
    MalformedDate { input: String },

    /// Schedule entries must ascend by date.
    #[error("schedule entry for {date} is out of order")]
    UnorderedSchedule { date: NaiveDate },

    /// Each calendar date may appear at most once in a schedule.
    #[error("duplicate schedule entry for {date}")]
    DuplicateDate { date: NaiveDate },

    /// Date outside the supported Hijri conversion range (1938-2076).
    #[error("date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Latitude/longitude outside valid bounds.
    #[error("coordinate ({lat}, {lng}) is out of range")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Transport-level fetch failure.
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but did not carry a usable schedule.
    #[error("unexpected response payload: {reason}")]
    BadPayload { reason: String },
}

impl TimetableError {
    pub fn malformed_time(input: impl Into<String>) -> Self {
        Self::MalformedTime { input: input.into() }
    }

    pub fn malformed_date(input: impl Into<String>) -> Self {
        Self::MalformedDate { input: input.into() }
    }

    /// Creates a `DateOutOfRange` error with the supported Hijri bounds.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::from_ymd_opt(crate::hijri::HIJRI_MIN_YEAR, 1, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(1938, 1, 1).unwrap()),
            max: NaiveDate::from_ymd_opt(crate::hijri::HIJRI_MAX_YEAR, 12, 31)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(2076, 12, 31).unwrap()),
        }
    }

    pub fn invalid_coordinate(lat: f64, lng: f64) -> Self {
        Self::InvalidCoordinate { lat, lng }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn bad_payload(reason: impl Into<String>) -> Self {
        Self::BadPayload { reason: reason.into() }
    }
}

/// Parses a 12-hour wall-clock string such as `"05:15 AM"` or `"6:30 pm"`.
///
/// Hour 12 AM maps to hour-of-day 0 and 12 PM stays 12; whitespace and
/// designator case are tolerated. Anything else is a `MalformedTime` error,
/// never a silently substituted midnight.
pub fn parse_clock_12h(input: &str) -> Result<NaiveTime, TimetableError> {
    let normalized = input.trim().to_ascii_uppercase();
    NaiveTime::parse_from_str(&normalized, "%I:%M %p")
        .map_err(|_| TimetableError::malformed_time(input))
}

/// Formats a wall-clock time as a 12-hour string, e.g. `5:00 AM`, `6:30 PM`.
///
/// Formatting then re-parsing reproduces the same hour and minute.
pub fn format_clock_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

impl ScheduleDay {
    /// Human-readable share block for this day's timings.
    ///
    /// `season` is the display year pair (e.g. "2026 / 1447"), `location`
    /// the resolved place label; both degrade to the original defaults.
    pub fn share_text(&self, season: Option<&str>, location: Option<&str>) -> String {
        format!(
            "Ramadan {} - {}\n{}\nSahur: {}\nIftar: {}",
            season.unwrap_or(""),
            self.date,
            location.unwrap_or(DEFAULT_LOCATION_LABEL),
            format_clock_12h(self.sahur),
            format_clock_12h(self.iftar),
        )
    }
}

/// Ordered sequence of daily fasting windows.
///
/// Construction enforces ascending, duplicate-free dates. Calendar gaps are
/// allowed; consumers must treat them as longer waiting windows rather than
/// errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    days: Vec<ScheduleDay>,
}

impl Schedule {
    /// Validates and wraps a day sequence.
    ///
    /// # Errors
    /// `UnorderedSchedule` or `DuplicateDate` when the dates do not strictly
    /// ascend.
    pub fn new(days: Vec<ScheduleDay>) -> Result<Self, TimetableError> {
        for pair in days.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(TimetableError::DuplicateDate { date: pair[1].date });
            }
            if pair[1].date < pair[0].date {
                return Err(TimetableError::UnorderedSchedule { date: pair[1].date });
            }
        }
        Ok(Self { days })
    }

    /// The "no schedule loaded yet" state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The entry whose civil date equals `date`, if present.
    pub fn day_for(&self, date: NaiveDate) -> Option<&ScheduleDay> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn first(&self) -> Option<&ScheduleDay> {
        self.days.first()
    }

    pub fn last(&self) -> Option<&ScheduleDay> {
        self.days.last()
    }

    /// Generates an offline placeholder: `len` consecutive days from `start`
    /// with fixed sahur/iftar times and computed Hijri labels.
    ///
    /// # Errors
    /// `DateOutOfRange` when a generated date falls outside the supported
    /// Hijri conversion range.
    pub fn placeholder(start: NaiveDate, len: u32) -> Result<Self, TimetableError> {
        let sahur = NaiveTime::from_hms_opt(PLACEHOLDER_SAHUR.0, PLACEHOLDER_SAHUR.1, 0).unwrap();
        let iftar = NaiveTime::from_hms_opt(PLACEHOLDER_IFTAR.0, PLACEHOLDER_IFTAR.1, 0).unwrap();

        let mut days = Vec::with_capacity(len as usize);
        let mut date = start;
        for number in 1..=len {
            days.push(ScheduleDay {
                day: number,
                date,
                hijri_label: crate::hijri::hijri_label(date)?,
                sahur,
                iftar,
            });
            date = date
                .succ_opt()
                .ok_or_else(|| TimetableError::date_out_of_range(date))?;
        }
        Ok(Self { days })
    }
}
