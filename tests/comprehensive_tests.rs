use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use imsakiyah::devotions::{
    inspiration_for_day, CharityJar, Deed, DeedChecklist, JuzProgress, TasbihCounter, ZakatInputs,
};
use imsakiyah::prelude::*;
use imsakiyah::storage::{read_schedule_cache, write_schedule_cache, CachedSchedule};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn at(s: &str, h: u32, m: u32) -> NaiveDateTime {
    date(s).and_hms_opt(h, m, 0).unwrap()
}

fn day(number: u32, d: &str, sahur: &str, iftar: &str) -> ScheduleDay {
    ScheduleDay {
        day: number,
        date: date(d),
        hijri_label: format!("{number} Ramadhan 1447"),
        sahur: parse_clock_12h(sahur).unwrap(),
        iftar: parse_clock_12h(iftar).unwrap(),
    }
}

#[test]
fn test_single_day_before_sahur() {
    // One-day schedule, an hour before sahur. No previous day exists, so
    // the night window is unframed and progress stays at zero.
    let schedule = Schedule::new(vec![day(1, "2026-02-20", "05:00 AM", "06:30 PM")]).unwrap();
    let status = resolve(&schedule, at("2026-02-20", 4, 0));

    assert_eq!(status.phase, Phase::AwaitingSahur);
    assert_eq!(status.remaining.hours, 1);
    assert_eq!(status.remaining.minutes, 0);
    assert_eq!(status.progress_percent, 0.0);
    assert_eq!(status.active_day.unwrap().day, 1);
}

#[test]
fn test_single_day_midday() {
    // Noon sits 7h into the 13.5h sahur->iftar window.
    let schedule = Schedule::new(vec![day(1, "2026-02-20", "05:00 AM", "06:30 PM")]).unwrap();
    let status = resolve(&schedule, at("2026-02-20", 12, 0));

    assert_eq!(status.phase, Phase::AwaitingIftar);
    assert_eq!(status.remaining.hours, 6);
    assert_eq!(status.remaining.minutes, 30);
    let expected = 7.0 / 13.5 * 100.0;
    assert!((status.progress_percent - expected).abs() < 1e-9);
}

#[test]
fn test_single_day_after_iftar() {
    let schedule = Schedule::new(vec![day(1, "2026-02-20", "05:00 AM", "06:30 PM")]).unwrap();
    let status = resolve(&schedule, at("2026-02-20", 19, 0));

    assert_eq!(status.phase, Phase::Idle);
    assert!(status.remaining.is_zero());
    // The day tile stays visible even though nothing is left to wait for.
    assert!(status.active_day.is_some());
}

#[test]
fn test_schedule_exhausted_after_final_iftar() {
    let schedule = Schedule::new(vec![
        day(1, "2026-02-20", "05:00 AM", "06:30 PM"),
        day(2, "2026-02-21", "05:01 AM", "06:31 PM"),
    ])
    .unwrap();
    let status = resolve(&schedule, at("2026-02-21", 23, 0));

    assert_eq!(status.phase, Phase::Idle);
    assert!(status.remaining.is_zero());
}

#[test]
fn test_sahur_boundary_is_inclusive() {
    // At the sahur instant itself the fast has started: the iftar wait is
    // on, not another second of the night window.
    let schedule = Schedule::new(vec![day(1, "2026-02-20", "05:00 AM", "06:30 PM")]).unwrap();
    let status = resolve(&schedule, at("2026-02-20", 5, 0));

    assert_eq!(status.phase, Phase::AwaitingIftar);
    assert_eq!(status.remaining.hours, 13);
    assert_eq!(status.remaining.minutes, 30);
}

#[test]
fn test_evening_counts_down_to_tomorrows_sahur() {
    let schedule = Schedule::new(vec![
        day(1, "2026-02-20", "05:00 AM", "06:30 PM"),
        day(2, "2026-02-21", "05:01 AM", "06:31 PM"),
    ])
    .unwrap();
    let status = resolve(&schedule, at("2026-02-20", 20, 0));

    assert_eq!(status.phase, Phase::AwaitingSahur);
    assert_eq!(status.remaining.hours, 9);
    assert_eq!(status.remaining.minutes, 1);
    // Tonight's window runs from today's iftar.
    assert!(status.progress_percent > 0.0);
}

#[test]
fn test_before_period_starts_counts_toward_first_sahur() {
    let schedule = Schedule::new(vec![day(1, "2026-02-25", "05:00 AM", "06:30 PM")]).unwrap();
    let status = resolve(&schedule, at("2026-02-22", 8, 0));

    assert_eq!(status.phase, Phase::AwaitingSahur);
    assert_eq!(status.active_day.as_ref().unwrap().date, date("2026-02-25"));
    assert_eq!(status.remaining.hours, 2 * 24 + 21);
    assert_eq!(status.progress_percent, 0.0);
}

#[test]
fn test_empty_schedule_is_representable_not_an_error() {
    let status = resolve(&Schedule::empty(), at("2026-02-20", 12, 0));
    assert!(status.is_idle());
    assert!(status.active_day.is_none());
}

#[test]
fn test_placeholder_month_walkthrough() {
    let schedule = Schedule::placeholder(date("2026-02-18"), 30).unwrap();

    // Pre-dawn on day one: nothing to frame progress against.
    let before = resolve(&schedule, at("2026-02-18", 4, 0));
    assert_eq!(before.phase, Phase::AwaitingSahur);
    assert_eq!(before.progress_percent, 0.0);

    // Mid-month, mid-fast.
    let midday = resolve(&schedule, at("2026-03-04", 12, 0));
    assert_eq!(midday.phase, Phase::AwaitingIftar);
    assert_eq!(midday.active_day.as_ref().unwrap().day, 15);
    assert!(!midday.active_day.as_ref().unwrap().hijri_label.is_empty());

    // Mid-month night frames against the previous day's iftar.
    let night = resolve(&schedule, at("2026-03-04", 2, 0));
    assert_eq!(night.phase, Phase::AwaitingSahur);
    assert!(night.progress_percent > 0.0);

    // Past the final iftar the month is done.
    let done = resolve(&schedule, at("2026-03-19", 21, 0));
    assert_eq!(done.phase, Phase::Idle);
}

#[test]
fn test_clock_round_trip_every_hour() {
    for hour in 0..24 {
        for minute in [0, 5, 30, 59] {
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            let rendered = format_clock_12h(time);
            assert_eq!(parse_clock_12h(&rendered).unwrap(), time, "via {rendered:?}");
        }
    }
}

#[test]
fn test_malformed_times_are_errors_not_midnight() {
    let result = parse_clock_12h("55:99 XM");
    assert!(matches!(result, Err(TimetableError::MalformedTime { .. })));
    if let Err(err) = result {
        assert!(err.to_string().contains("55:99 XM"));
    }
}

#[test]
fn test_cached_schedule_round_trips_and_resolves() {
    let mut store = MemoryStore::new();
    let days = vec![
        day(1, "2026-02-20", "05:00 AM", "06:30 PM"),
        day(2, "2026-02-21", "05:01 AM", "06:31 PM"),
    ];
    write_schedule_cache(
        &mut store,
        &CachedSchedule {
            days: days.clone(),
            coords: Some(GeoCoordinate::new_unchecked(24.8607, 67.0011)),
            city: Some("Karachi".to_string()),
            timestamp: 1_750_000_000_000,
        },
    );

    let cached = read_schedule_cache(&store).expect("cache entry should read back");
    let schedule = cached.schedule().unwrap();
    assert_eq!(schedule.len(), 2);

    let status = resolve(&schedule, at("2026-02-20", 12, 0));
    assert_eq!(status.phase, Phase::AwaitingIftar);
}

#[test]
fn test_extension_trait_queries() {
    let schedule = Schedule::new(vec![
        day(1, "2026-02-20", "05:00 AM", "06:30 PM"),
        day(2, "2026-02-21", "05:01 AM", "06:31 PM"),
    ])
    .unwrap();

    let noon = at("2026-02-20", 12, 0);
    assert!(noon.is_fasting(&schedule));
    assert_eq!(noon.fasting_phase(&schedule), Phase::AwaitingIftar);
    assert_eq!(noon.next_iftar(&schedule).unwrap(), at("2026-02-20", 18, 30));
    assert_eq!(noon.next_sahur(&schedule).unwrap(), at("2026-02-21", 5, 1));
}

#[test]
fn test_share_text_for_active_day() {
    let entry = day(3, "2026-02-20", "05:15 AM", "06:30 PM");
    let text = entry.share_text(Some("2026 / 1447"), Some("Karachi"));

    assert!(text.starts_with("Ramadan 2026 / 1447 - 2026-02-20"));
    assert!(text.contains("Karachi"));
    assert!(text.contains("Sahur: 5:15 AM"));
    assert!(text.contains("Iftar: 6:30 PM"));
}

#[test]
fn test_devotional_trackers_share_one_store() {
    let mut store = MemoryStore::new();
    let today = date("2026-02-20");

    let mut tasbih = TasbihCounter::load(&store);
    for _ in 0..33 {
        tasbih.increment();
    }
    tasbih.save(&mut store);

    let mut checklist = DeedChecklist::load(&store, today);
    checklist.toggle(Deed::Fasting);
    checklist.toggle(Deed::Prayers);
    checklist.save(&mut store, today);

    let mut juz = JuzProgress::load(&store);
    juz.advance();
    juz.save(&mut store);

    let mut jar = CharityJar::load(&store);
    jar.add(5);
    jar.save(&mut store);

    assert_eq!(TasbihCounter::load(&store).count(), 33);
    assert_eq!(DeedChecklist::load(&store, today).completed(), 2);
    assert_eq!(JuzProgress::load(&store).read(), 1);
    assert_eq!(CharityJar::load(&store).percent(), 5);
}

#[test]
fn test_zakat_and_inspiration() {
    let inputs = ZakatInputs {
        cash: 4000.0,
        gold: 0.0,
        silver: 0.0,
        investments: 0.0,
        debts: 0.0,
    };
    assert!((inputs.due() - 100.0).abs() < 1e-9);

    // Rotation wraps at the table length.
    let len = imsakiyah::devotions::DAILY_INSPIRATIONS.len() as u32;
    assert_eq!(inspiration_for_day(2), inspiration_for_day(2 + len));
}
