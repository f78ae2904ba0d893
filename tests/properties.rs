use chrono::{Days, NaiveDate, NaiveTime, TimeDelta};
use imsakiyah::prelude::*;
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
}

/// Builds a gap-free schedule of `len` days with slightly drifting times,
/// the way a real monthly timetable drifts by a minute or two per day.
fn drifting_schedule(len: u32) -> Schedule {
    let days = (0..len)
        .map(|i| {
            let date = base_date() + Days::new(u64::from(i));
            ScheduleDay {
                day: i + 1,
                date,
                hijri_label: String::new(),
                sahur: NaiveTime::from_hms_opt(5, (i % 50) as u32, 0).unwrap(),
                iftar: NaiveTime::from_hms_opt(18, 59 - (i % 50) as u32, 0).unwrap(),
            }
        })
        .collect();
    Schedule::new(days).unwrap()
}

proptest! {
    /// Invariant: `resolve` never panics, `remaining` is never negative and
    /// progress stays in [0, 100], for any instant around any schedule size.
    #[test]
    fn resolver_outputs_stay_clamped(len in 0u32..40, offset_mins in -80_000i64..80_000) {
        let schedule = drifting_schedule(len);
        let now = base_date().and_hms_opt(0, 0, 0).unwrap() + TimeDelta::minutes(offset_mins);

        let status = resolve(&schedule, now);

        prop_assert!(status.remaining.total_seconds() >= 0);
        prop_assert!(status.remaining.minutes < 60 && status.remaining.seconds < 60);
        prop_assert!((0.0..=100.0).contains(&status.progress_percent));
    }

    /// Invariant: the resolver is a pure function of (schedule, now).
    #[test]
    fn resolver_is_deterministic(len in 0u32..40, offset_mins in -80_000i64..80_000) {
        let schedule = drifting_schedule(len);
        let now = base_date().and_hms_opt(0, 0, 0).unwrap() + TimeDelta::minutes(offset_mins);

        prop_assert_eq!(resolve(&schedule, now), resolve(&schedule, now));
    }

    /// Invariant: the idle phase carries no remaining time, and any
    /// non-idle phase names a concrete active day.
    #[test]
    fn idle_means_nothing_left(len in 0u32..40, offset_mins in -80_000i64..80_000) {
        let schedule = drifting_schedule(len);
        let now = base_date().and_hms_opt(0, 0, 0).unwrap() + TimeDelta::minutes(offset_mins);

        let status = resolve(&schedule, now);
        if status.phase.is_idle() {
            prop_assert!(status.remaining.is_zero());
            prop_assert_eq!(status.progress_percent, 0.0);
        } else {
            prop_assert!(status.active_day.is_some());
        }
    }

    /// Within one fasting window, remaining strictly decreases and progress
    /// never moves backwards as the clock advances.
    #[test]
    fn window_advance_is_monotonic(day in 1u32..29, s1 in 0i64..46_000, s2 in 0i64..46_000) {
        let schedule = drifting_schedule(30);
        let entry = &schedule.days()[day as usize];
        let sahur_at = entry.date.and_time(entry.sahur);

        // Both instants inside [sahur, iftar): the narrowest generated
        // window is 13h1m, 46_000s stays short of its end.
        let (a, b) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        let t1 = sahur_at + TimeDelta::seconds(a);
        let t2 = sahur_at + TimeDelta::seconds(b);

        let r1 = resolve(&schedule, t1);
        let r2 = resolve(&schedule, t2);

        prop_assert_eq!(r1.phase, Phase::AwaitingIftar);
        prop_assert_eq!(r2.phase, Phase::AwaitingIftar);
        if a < b {
            prop_assert!(r1.remaining.total_seconds() > r2.remaining.total_seconds());
        }
        prop_assert!(r1.progress_percent <= r2.progress_percent);
    }

    /// Formatting any wall-clock minute to 12-hour display and re-parsing
    /// reproduces the same hour and minute.
    #[test]
    fn clock_display_round_trips(hour in 0u32..24, minute in 0u32..60) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        let rendered = format_clock_12h(time);
        prop_assert_eq!(parse_clock_12h(&rendered).unwrap(), time);
    }
}
