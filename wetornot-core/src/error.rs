use thiserror::Error;

/// Every way a weather lookup can end early. None of these are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please provide a city name")]
    EmptyInput,

    #[error("City not found: \"{0}\"")]
    CityNotFound(String),

    /// No response was received at all.
    #[error("Network Error: Could not connect to weather service")]
    Network(#[source] reqwest::Error),

    /// The service answered with an error status.
    #[error("API Error: {0}")]
    Api(String),

    #[error("Unexpected response from weather service: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    /// Preference order: service-provided reason, then HTTP status text, then a
    /// generic fallback.
    pub(crate) fn from_error_response(status: reqwest::StatusCode, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            reason: Option<String>,
        }

        let reason = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.reason)
            .filter(|r| !r.is_empty())
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_else(|| "Unknown error".to_string());

        WeatherError::Api(reason)
    }
}
