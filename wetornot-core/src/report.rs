use tracing::debug;

use crate::{WeatherError, WeatherProvider, model::WeatherReport};

/// Geocode `city`, then fetch its forecast. Strictly sequential, no retries.
///
/// Surrounding whitespace is ignored; a blank query fails before any request
/// is made, and the forecast is never requested for a city that wasn't found.
pub async fn fetch_report(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<WeatherReport, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherError::EmptyInput);
    }

    let location = provider.geocode(city).await?;
    let forecast = provider.forecast(&location).await?;

    debug!("Built report for {}", location.display_name());
    Ok(WeatherReport { location, forecast })
}
