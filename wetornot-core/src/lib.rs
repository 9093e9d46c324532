//! Core library for the `wetornot` CLI.
//!
//! This crate defines:
//! - The Open-Meteo geocoding and forecast client, behind [`WeatherProvider`]
//! - Shared domain models (locations, current conditions, daily forecast)
//! - The weather-code table and text formatting of a report
//!
//! It is used by `wetornot-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod report;

pub use condition::{WeatherCondition, weather_condition};
pub use config::OpenMeteoConfig;
pub use error::WeatherError;
pub use format::{Clock, render_report};
pub use model::{CurrentConditions, DailyForecast, Forecast, ForecastDay, Location, WeatherReport};
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};
pub use report::fetch_report;
