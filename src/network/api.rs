//! Ramadan schedule API client.
//!
//! Fetches the daily fasting timetable for a location and normalizes the
//! payload into [`Schedule`]. When the live fetch fails, [`load_schedule`]
//! degrades to the cached copy and finally to a generated placeholder.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::storage::{read_schedule_cache, write_schedule_cache, CachedSchedule, KeyValueStore};
use crate::timetable::{parse_clock_12h, Schedule, TimetableError};
use crate::types::{GeoCoordinate, ScheduleDay};

/// Public schedule endpoint.
pub const DEFAULT_API_URL: &str = "https://islamicapi.com/api/v1/ramadan/";

/// Karachi; used when no caller-supplied location is available.
pub const DEFAULT_COORDS: GeoCoordinate = GeoCoordinate { lat: 24.8607, lng: 67.0011 };

/// Length of the generated offline schedule.
pub const OFFLINE_SCHEDULE_DAYS: u32 = 30;

/// Fetch configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub coords: GeoCoordinate,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            coords: DEFAULT_COORDS,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn coords(mut self, coords: GeoCoordinate) -> Self {
        self.coords = coords;
        self
    }
}

/// A normalized fetch result: the validated schedule plus the display
/// season label (e.g. "2026 / 1447") when the payload carried one.
#[derive(Debug, Clone)]
pub struct FetchedSchedule {
    pub season: Option<String>,
    pub schedule: Schedule,
}

/// Where [`load_schedule`] got its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    Live,
    Cached,
    Offline,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    ramadan_year: Option<String>,
    #[serde(default)]
    data: Option<ApiPayload>,
    #[serde(default)]
    fasting: Option<Vec<ApiDay>>,
}

#[derive(Debug, Deserialize)]
struct ApiPayload {
    #[serde(default)]
    ramadan_year: Option<String>,
    fasting: Vec<ApiDay>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    day: u32,
    date: String,
    #[serde(default)]
    date_hijri: Option<String>,
    #[serde(default)]
    hijri_readable: Option<String>,
    time: ApiTime,
}

#[derive(Debug, Deserialize)]
struct ApiTime {
    sahur: String,
    iftar: String,
}

impl ApiDay {
    fn into_schedule_day(self) -> Result<ScheduleDay, TimetableError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| TimetableError::malformed_date(&self.date))?;
        Ok(ScheduleDay {
            day: self.day,
            date,
            hijri_label: self.hijri_readable.or(self.date_hijri).unwrap_or_default(),
            sahur: parse_clock_12h(&self.time.sahur)?,
            iftar: parse_clock_12h(&self.time.iftar)?,
        })
    }
}

/// Accepts both payload shapes the endpoint has served: the fasting list
/// nested under `data`, or flat at the top level.
fn normalize(payload: ApiResponse) -> Result<FetchedSchedule, TimetableError> {
    if let Some(status) = payload.status.as_deref() {
        if status != "success" {
            return Err(TimetableError::bad_payload(format!("API status {status:?}")));
        }
    }

    let (season, raw_days) = match payload.data {
        Some(data) => (data.ramadan_year.or(payload.ramadan_year), data.fasting),
        None => (
            payload.ramadan_year,
            payload
                .fasting
                .ok_or_else(|| TimetableError::bad_payload("missing fasting entries"))?,
        ),
    };

    let days = raw_days
        .into_iter()
        .map(ApiDay::into_schedule_day)
        .collect::<Result<Vec<_>, _>>()?;

    Schedule::new(days).map(|schedule| FetchedSchedule { season, schedule })
}

/// Fetches and normalizes the schedule for the configured location.
///
/// # Errors
/// `Network` on transport or decode failure, `BadPayload` when the response
/// carries no usable schedule, `MalformedTime`/`MalformedDate` when an
/// entry cannot be parsed.
pub async fn fetch_schedule(config: &ApiConfig) -> Result<FetchedSchedule, TimetableError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("imsakiyah/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TimetableError::network(format!("failed to create HTTP client: {e}")))?;

    let response = client
        .get(&config.base_url)
        .query(&[
            ("lat", config.coords.lat.to_string()),
            ("lon", config.coords.lng.to_string()),
            ("api_key", config.api_key.clone()),
        ])
        .send()
        .await
        .map_err(|e| TimetableError::network(format!("schedule request failed: {e}")))?;

    let payload: ApiResponse = response
        .json()
        .await
        .map_err(|e| TimetableError::network(format!("failed to decode schedule response: {e}")))?;

    normalize(payload)
}

/// Loads a schedule with the full fallback chain: live fetch, then the
/// cached copy, then a generated placeholder starting at `offline_start`.
///
/// A successful live fetch refreshes the cache. Cached and offline results
/// carry no season label.
///
/// # Errors
/// Only when every source fails, including placeholder generation (start
/// date outside the supported range).
pub async fn load_schedule(
    config: &ApiConfig,
    store: &mut impl KeyValueStore,
    offline_start: NaiveDate,
) -> Result<(FetchedSchedule, ScheduleSource), TimetableError> {
    match fetch_schedule(config).await {
        Ok(fetched) => {
            write_schedule_cache(
                store,
                &CachedSchedule {
                    days: fetched.schedule.days().to_vec(),
                    coords: Some(config.coords),
                    city: None,
                    timestamp: Utc::now().timestamp_millis(),
                },
            );
            Ok((fetched, ScheduleSource::Live))
        }
        Err(err) => {
            tracing::warn!(error = %err, "live schedule fetch failed, trying cache");

            if let Some(cached) = read_schedule_cache(store) {
                match cached.schedule() {
                    Ok(schedule) => {
                        return Ok((
                            FetchedSchedule { season: None, schedule },
                            ScheduleSource::Cached,
                        ));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "cached schedule is unusable");
                    }
                }
            }

            let schedule = Schedule::placeholder(offline_start, OFFLINE_SCHEDULE_DAYS)?;
            tracing::warn!("serving generated offline schedule");
            Ok((
                FetchedSchedule { season: None, schedule },
                ScheduleSource::Offline,
            ))
        }
    }
}
