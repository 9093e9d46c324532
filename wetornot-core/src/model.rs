use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::WeatherError;

/// First geocoding match for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// "Paris, France", or just the name when the service gave no country.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Snapshot of the `current` block of a forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "temperature_2m")]
    pub temperature_c: f64,
    #[serde(rename = "apparent_temperature")]
    pub feels_like_c: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity_pct: f64,
    pub weather_code: i32,
    #[serde(rename = "surface_pressure")]
    pub pressure_hpa: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed_kmh: f64,
    #[serde(rename = "wind_direction_10m", default)]
    pub wind_direction_deg: Option<f64>,
}

/// The `daily` block: index-aligned sequences, one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<NaiveDate>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub wind_speed_10m_max: Vec<f64>,
    #[serde(default)]
    pub wind_direction_10m_dominant: Vec<Option<f64>>,
}

/// One row of [`DailyForecast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub max_c: f64,
    pub min_c: f64,
    /// Null precipitation is reported as 0.
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: Option<f64>,
}

impl DailyForecast {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Checks that every sequence describes the same days.
    ///
    /// The wind direction sequence may be absent entirely, but if present it
    /// must be aligned like the rest.
    pub fn validate(&self) -> Result<(), WeatherError> {
        let expected = self.time.len();
        let lengths = [
            ("weather_code", self.weather_code.len()),
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("wind_speed_10m_max", self.wind_speed_10m_max.len()),
        ];

        for (field, len) in lengths {
            if len != expected {
                return Err(WeatherError::InvalidResponse(format!(
                    "daily.{field} has {len} entries, expected {expected}"
                )));
            }
        }

        let directions = self.wind_direction_10m_dominant.len();
        if directions != 0 && directions != expected {
            return Err(WeatherError::InvalidResponse(format!(
                "daily.wind_direction_10m_dominant has {directions} entries, expected {expected}"
            )));
        }

        Ok(())
    }

    pub fn day(&self, i: usize) -> Option<ForecastDay> {
        Some(ForecastDay {
            date: *self.time.get(i)?,
            weather_code: *self.weather_code.get(i)?,
            max_c: *self.temperature_2m_max.get(i)?,
            min_c: *self.temperature_2m_min.get(i)?,
            precipitation_mm: self.precipitation_sum.get(i).copied().flatten().unwrap_or(0.0),
            wind_speed_kmh: *self.wind_speed_10m_max.get(i)?,
            wind_direction_deg: self.wind_direction_10m_dominant.get(i).copied().flatten(),
        })
    }

    pub fn days(&self) -> impl Iterator<Item = ForecastDay> + '_ {
        (0..self.len()).map_while(|i| self.day(i))
    }
}

/// Parsed forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// IANA identifier resolved by the service from the coordinates.
    pub timezone: String,
    pub current: CurrentConditions,
    pub daily: DailyForecast,
}

/// Everything the renderer needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub forecast: Forecast,
}
