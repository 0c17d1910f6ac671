//! Geocoding: convert a free-text place name to coordinates via the
//! OpenWeather direct geocoding endpoint. One result requested, one network
//! round trip per call, no retries.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{WeatherError, truncate_body};
use crate::model::Coordinates;

#[derive(Debug, Deserialize)]
struct GeoCandidate {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    base_url: String,
    api_key: String,
}

impl Geocoder {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve `query` to the first candidate's coordinates.
    ///
    /// # Errors
    ///
    /// [`WeatherError::Upstream`] on a non-success response,
    /// [`WeatherError::NotFound`] when the candidate list is empty.
    pub async fn resolve(&self, query: &str) -> Result<Coordinates, WeatherError> {
        let url = format!("{}/geo/1.0/direct", self.base_url);
        tracing::debug!(%query, "resolving coordinates");

        let res = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Upstream {
                status,
                body: truncate_body(&body),
            });
        }

        let candidates: Vec<GeoCandidate> = serde_json::from_str(&body)
            .map_err(|err| WeatherError::MalformedData(format!("geocoding response: {err}")))?;

        let first = candidates
            .first()
            .ok_or_else(|| WeatherError::NotFound(query.to_owned()))?;

        tracing::debug!(lat = first.lat, lon = first.lon, "resolved '{query}'");
        Ok(Coordinates {
            lat: first.lat,
            lon: first.lon,
        })
    }
}
