/// Default Open-Meteo geocoding endpoint. No API key required.
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Default Open-Meteo forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Endpoint and request settings for the Open-Meteo provider.
///
/// There is no on-disk configuration; this only exists so callers (and tests)
/// can point the provider at another host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMeteoConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Language of geocoding result names.
    pub language: String,
    pub forecast_days: u8,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            language: "en".to_string(),
            forecast_days: 7,
        }
    }
}

impl OpenMeteoConfig {
    /// Config with both endpoints rooted at `base`, e.g. a mock server URI.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            geocoding_url: format!("{base}/v1/search"),
            forecast_url: format!("{base}/v1/forecast"),
            ..Self::default()
        }
    }
}
