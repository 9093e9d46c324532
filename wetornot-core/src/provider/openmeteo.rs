use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    OpenMeteoConfig, WeatherError,
    model::{Forecast, Location},
};

use super::WeatherProvider;

const CURRENT_FIELDS: [&str; 7] = [
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "weather_code",
    "surface_pressure",
    "wind_speed_10m",
    "wind_direction_10m",
];

const DAILY_FIELDS: [&str; 6] = [
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "wind_speed_10m_max",
    "wind_direction_10m_dominant",
];

/// Open-Meteo geocoding + forecast client. Free, no API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    config: OpenMeteoConfig,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: OpenMeteoConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<Location>,
}

/// Turns a response into `T`, or the matching error kind.
async fn decode<T: DeserializeOwned>(res: Response, what: &str) -> Result<T, WeatherError> {
    let status = res.status();
    let body = res.text().await.map_err(WeatherError::Network)?;

    if !status.is_success() {
        debug!("{} request failed with status {}: {}", what, status, truncate_body(&body));
        return Err(WeatherError::from_error_response(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| WeatherError::InvalidResponse(format!("{what} response: {e}")))
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn geocode(&self, city: &str) -> Result<Location, WeatherError> {
        debug!("Geocoding '{}'", city);

        let res = self
            .http
            .get(&self.config.geocoding_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", self.config.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(WeatherError::Network)?;

        let parsed: GeocodingResponse = decode(res, "Geocoding").await?;

        let location = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        debug!(
            "Found location: {} ({:.4}, {:.4})",
            location.display_name(),
            location.latitude,
            location.longitude
        );

        Ok(location)
    }

    async fn forecast(&self, location: &Location) -> Result<Forecast, WeatherError> {
        debug!("Fetching forecast for ({}, {})", location.latitude, location.longitude);

        let res = self
            .http
            .get(&self.config.forecast_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.join(",")),
                ("daily", DAILY_FIELDS.join(",")),
                ("timezone", "auto".to_string()),
                ("forecast_days", self.config.forecast_days.to_string()),
            ])
            .send()
            .await
            .map_err(WeatherError::Network)?;

        let forecast: Forecast = decode(res, "Forecast").await?;
        forecast.daily.validate()?;

        debug!("Forecast timezone: {}, {} days", forecast.timezone, forecast.daily.len());
        Ok(forecast)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
