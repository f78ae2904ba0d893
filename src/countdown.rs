//! Schedule-relative countdown resolution.
//!
//! [`resolve`] is a pure function of a schedule and an instant: it picks the
//! relevant day, decides which meal boundary comes next, and derives the
//! remaining duration plus an elapsed-fraction for the current waiting
//! window. Ticking cadence is the caller's concern; each evaluation stands
//! alone.

use chrono::{Days, NaiveDateTime};

use crate::timetable::Schedule;
use crate::types::{CountdownStatus, Phase, TimeLeft};

/// Resolves the countdown state for `now` against `schedule`.
///
/// Day selection matches `now`'s civil date exactly; when today is absent
/// (period not started, or a gap), the first strictly future entry takes
/// over. An empty or fully elapsed schedule yields the idle sentinel rather
/// than an error.
///
/// Phase boundaries are inclusive at the window start and exclusive at its
/// end: at the sahur instant itself the fast has begun and the iftar wait
/// is on.
pub fn resolve(schedule: &Schedule, now: NaiveDateTime) -> CountdownStatus {
    let days = schedule.days();
    let today = now.date();

    let index = days
        .iter()
        .position(|d| d.date == today)
        .or_else(|| days.iter().position(|d| d.date > today));
    let Some(index) = index else {
        return CountdownStatus::idle();
    };

    let active = &days[index];
    let sahur_at = active.date.and_time(active.sahur);
    let iftar_at = active.date.and_time(active.iftar);

    let (target, window_start, phase) = if now < sahur_at {
        // The night window runs from the previous entry's iftar, re-anchored
        // to the eve of the active day. Without a previous entry the window
        // start is undefined and progress stays 0.
        let window = index.checked_sub(1).and_then(|prev| {
            let eve = active.date.checked_sub_days(Days::new(1))?;
            Some(eve.and_time(days[prev].iftar))
        });
        (sahur_at, window, Phase::AwaitingSahur)
    } else if now < iftar_at {
        (iftar_at, Some(sahur_at), Phase::AwaitingIftar)
    } else if let Some(next) = days.get(index + 1) {
        // Tonight's wait targets tomorrow's sahur.
        (next.date.and_time(next.sahur), Some(iftar_at), Phase::AwaitingSahur)
    } else {
        return CountdownStatus {
            active_day: Some(active.clone()),
            phase: Phase::Idle,
            remaining: TimeLeft::zero(),
            progress_percent: 0.0,
        };
    };

    CountdownStatus {
        active_day: Some(active.clone()),
        phase,
        remaining: TimeLeft::from_delta(target - now),
        progress_percent: window_progress(now, window_start, target),
    }
}

/// Elapsed fraction of `[start, end]` at `now`, as a clamped percentage.
/// 0 when the window start is unknown or the window is degenerate.
fn window_progress(now: NaiveDateTime, start: Option<NaiveDateTime>, end: NaiveDateTime) -> f64 {
    let Some(start) = start else { return 0.0 };
    if end <= start {
        return 0.0;
    }
    let elapsed = (now - start).num_milliseconds() as f64;
    let total = (end - start).num_milliseconds() as f64;
    (elapsed / total * 100.0).clamp(0.0, 100.0)
}
