//! Reverse geocoding to a human-readable place label.

use serde::Deserialize;

use crate::timetable::{TimetableError, DEFAULT_LOCATION_LABEL};
use crate::types::GeoCoordinate;

/// Public reverse-geocoding endpoint (no key required).
pub const DEFAULT_GEOCODER_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Place name candidates, most specific first.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceName {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default, rename = "principalSubdivision")]
    pub region: Option<String>,
}

impl PlaceName {
    /// The best available label: city, then locality, then region, then the
    /// fixed fallback.
    pub fn display_name(&self) -> String {
        [&self.city, &self.locality, &self.region]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOCATION_LABEL.to_string())
    }
}

/// Reverse geocodes against the default public endpoint.
pub async fn reverse_geocode(coords: GeoCoordinate) -> Result<PlaceName, TimetableError> {
    reverse_geocode_at(DEFAULT_GEOCODER_URL, coords).await
}

/// Reverse geocodes against a caller-supplied endpoint.
///
/// # Errors
/// `Network` on transport or decode failure.
pub async fn reverse_geocode_at(
    endpoint: &str,
    coords: GeoCoordinate,
) -> Result<PlaceName, TimetableError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("imsakiyah/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TimetableError::network(format!("failed to create HTTP client: {e}")))?;

    let response = client
        .get(endpoint)
        .query(&[
            ("latitude", coords.lat.to_string()),
            ("longitude", coords.lng.to_string()),
            ("localityLanguage", "en".to_string()),
        ])
        .send()
        .await
        .map_err(|e| TimetableError::network(format!("geocoding request failed: {e}")))?;

    response
        .json()
        .await
        .map_err(|e| TimetableError::network(format!("failed to decode geocoding response: {e}")))
}

/// Resolves a city label for display, degrading to the fixed fallback on
/// any failure. Never errors: a missing place name is not worth failing a
/// schedule load over.
pub async fn resolve_city_name(coords: GeoCoordinate) -> String {
    match reverse_geocode(coords).await {
        Ok(place) => place.display_name(),
        Err(err) => {
            tracing::warn!(error = %err, "reverse geocoding failed");
            DEFAULT_LOCATION_LABEL.to_string()
        }
    }
}
