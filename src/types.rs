use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which daily waiting period currently applies.
///
/// `AwaitingSahur` covers the night window up to the pre-dawn meal,
/// `AwaitingIftar` the fasting window up to sunset. `Idle` means the
/// timetable holds no further boundary (empty or fully elapsed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingSahur,
    AwaitingIftar,
    Idle,
}

impl Phase {
    pub fn is_awaiting_sahur(&self) -> bool {
        matches!(self, Phase::AwaitingSahur)
    }

    pub fn is_awaiting_iftar(&self) -> bool {
        matches!(self, Phase::AwaitingIftar)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    /// True while the fast itself is running (sahur has passed, iftar has not).
    pub fn is_fasting(&self) -> bool {
        self.is_awaiting_iftar()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::AwaitingSahur => "Until Sahur",
            Phase::AwaitingIftar => "Until Iftar",
            Phase::Idle => "Idle",
        };
        write!(f, "{}", s)
    }
}

/// Remaining duration decomposed for display.
///
/// Hours are not wrapped modulo 24: a gap spanning several days shows its
/// full hour count, matching the raw-duration digits a countdown renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeLeft {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Decomposes a non-negative delta. Negative input clamps to zero.
    pub fn from_delta(delta: TimeDelta) -> Self {
        let total = delta.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// One calendar day of the observance timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// 1-based day number within the observance period.
    pub day: u32,
    /// The civil date this entry applies to. Unique key within a schedule.
    pub date: NaiveDate,
    /// Display-only Hijri label, e.g. "5 Ramadan 1447".
    pub hijri_label: String,
    /// Wall-clock time of the pre-dawn meal boundary on `date`.
    pub sahur: NaiveTime,
    /// Wall-clock time of the sunset meal boundary on `date`.
    pub iftar: NaiveTime,
}

/// Resolver output, recomputed from scratch on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownStatus {
    /// The timetable entry currently relevant: today's, or the first future
    /// entry when today is absent. `None` once the timetable is exhausted.
    pub active_day: Option<ScheduleDay>,
    pub phase: Phase,
    /// Duration until the boundary ending `phase`. Never negative.
    pub remaining: TimeLeft,
    /// Elapsed fraction of the current waiting window, clamped to [0, 100].
    /// 0 when the window start cannot be determined.
    pub progress_percent: f64,
}

impl CountdownStatus {
    /// The sentinel for an empty or fully elapsed timetable.
    pub fn idle() -> Self {
        Self {
            active_day: None,
            phase: Phase::Idle,
            remaining: TimeLeft::zero(),
            progress_percent: 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Validates latitude [-90, 90] and longitude [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, crate::timetable::TimetableError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(crate::timetable::TimetableError::invalid_coordinate(lat, lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}
