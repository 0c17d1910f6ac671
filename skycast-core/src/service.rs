//! Orchestrates the weather path: geocode, fetch the forecast payload, build
//! the view-model sequence. The only weather entry point other layers call.

use chrono::Utc;
use reqwest::Client;

use crate::error::{WeatherError, truncate_body};
use crate::forecast::{build_forecast, parse_current};
use crate::geocode::Geocoder;
use crate::model::{Coordinates, ForecastEntry, ForecastPayload};

#[derive(Debug, Clone)]
pub struct WeatherService {
    http: Client,
    geocoder: Geocoder,
    base_url: String,
    api_key: String,
}

impl WeatherService {
    /// Construct with an explicit provider base URL and API key; there is no
    /// global instance and no hidden configuration.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = Client::new();
        let base_url = base_url.into();
        let api_key = api_key.into();

        Self {
            geocoder: Geocoder::new(http.clone(), base_url.clone(), api_key.clone()),
            http,
            base_url,
            api_key,
        }
    }

    async fn fetch_payload(&self, coords: Coordinates) -> Result<ForecastPayload, WeatherError> {
        let url = format!("{}/data/2.5/forecast", self.base_url);
        tracing::debug!(lat = coords.lat, lon = coords.lon, "fetching forecast payload");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.lat.to_string()),
                ("lon", coords.lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
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

        serde_json::from_str(&body)
            .map_err(|err| WeatherError::MalformedData(format!("forecast response: {err}")))
    }

    /// Resolve `city`, fetch its forecast and shape it into the
    /// "current + up to 5 days" sequence. Calls are strictly sequential and
    /// collaborator errors propagate unchanged.
    ///
    /// # Errors
    ///
    /// Any [`WeatherError`] from geocoding, the forecast fetch or payload
    /// validation.
    pub async fn get_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        tracing::info!(%city, "building forecast");

        let coords = self.geocoder.resolve(city).await?;
        let payload = self.fetch_payload(coords).await?;

        let current = parse_current(&payload)?;
        let entries = build_forecast(current, &payload, Utc::now().date_naive());

        tracing::debug!(entries = entries.len(), "forecast built");
        Ok(entries)
    }
}
