//! Extension trait for `NaiveDateTime`.

use chrono::NaiveDateTime;

use crate::countdown::resolve;
use crate::timetable::Schedule;
use crate::types::{CountdownStatus, Phase};

/// Extends `NaiveDateTime` with timetable-relative queries.
pub trait FastingClockExt {
    /// Full countdown state at this instant.
    fn countdown(&self, schedule: &Schedule) -> CountdownStatus;

    /// Which waiting period applies at this instant.
    fn fasting_phase(&self, schedule: &Schedule) -> Phase;

    /// True while the fast is running (between sahur and iftar of the
    /// active day).
    fn is_fasting(&self, schedule: &Schedule) -> bool;

    /// The next sahur instant strictly after this one, if the schedule
    /// still holds one.
    fn next_sahur(&self, schedule: &Schedule) -> Option<NaiveDateTime>;

    /// The next iftar instant strictly after this one, if the schedule
    /// still holds one.
    fn next_iftar(&self, schedule: &Schedule) -> Option<NaiveDateTime>;
}

impl FastingClockExt for NaiveDateTime {
    fn countdown(&self, schedule: &Schedule) -> CountdownStatus {
        resolve(schedule, *self)
    }

    fn fasting_phase(&self, schedule: &Schedule) -> Phase {
        resolve(schedule, *self).phase
    }

    fn is_fasting(&self, schedule: &Schedule) -> bool {
        self.fasting_phase(schedule).is_fasting()
    }

    fn next_sahur(&self, schedule: &Schedule) -> Option<NaiveDateTime> {
        schedule
            .days()
            .iter()
            .map(|d| d.date.and_time(d.sahur))
            .find(|instant| instant > self)
    }

    fn next_iftar(&self, schedule: &Schedule) -> Option<NaiveDateTime> {
        schedule
            .days()
            .iter()
            .map(|d| d.date.and_time(d.iftar))
            .find(|instant| instant > self)
    }
}
