use crate::{
    OpenMeteoConfig, WeatherError,
    model::{Forecast, Location},
    provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// The two network lookups the report needs.
///
/// The CLI only ever uses [`OpenMeteoProvider`]; the trait exists so the
/// pipeline can be driven by a fake in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Best match for a free-text place name.
    async fn geocode(&self, city: &str) -> Result<Location, WeatherError>;

    /// Current conditions and daily forecast for a resolved location.
    async fn forecast(&self, location: &Location) -> Result<Forecast, WeatherError>;
}

/// Construct the Open-Meteo provider from config.
pub fn provider_from_config(config: &OpenMeteoConfig) -> Box<dyn WeatherProvider> {
    Box::new(OpenMeteoProvider::new(config.clone()))
}
