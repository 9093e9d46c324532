//! WMO weather interpretation codes as used by Open-Meteo.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Human-readable description and emoji for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub description: &'static str,
    pub emoji: &'static str,
}

impl WeatherCondition {
    const fn new(description: &'static str, emoji: &'static str) -> Self {
        Self { description, emoji }
    }
}

/// Fallback for codes missing from the table.
pub const UNKNOWN: WeatherCondition = WeatherCondition::new("Unknown", "🌤️");

/// Exact-key lookup; there is no range matching.
pub fn weather_condition(code: i32) -> WeatherCondition {
    match code {
        0 => WeatherCondition::new("Clear sky", "☀️"),
        1 => WeatherCondition::new("Mainly clear", "🌤️"),
        2 => WeatherCondition::new("Partly cloudy", "⛅"),
        3 => WeatherCondition::new("Overcast", "☁️"),
        45 => WeatherCondition::new("Fog", "🌫️"),
        48 => WeatherCondition::new("Depositing rime fog", "🌫️"),
        51 => WeatherCondition::new("Light drizzle", "🌦️"),
        53 => WeatherCondition::new("Moderate drizzle", "🌦️"),
        55 => WeatherCondition::new("Dense drizzle", "🌧️"),
        56 => WeatherCondition::new("Light freezing drizzle", "🌨️"),
        57 => WeatherCondition::new("Dense freezing drizzle", "🌨️"),
        61 => WeatherCondition::new("Slight rain", "🌧️"),
        63 => WeatherCondition::new("Moderate rain", "🌧️"),
        65 => WeatherCondition::new("Heavy rain", "🌧️"),
        66 => WeatherCondition::new("Light freezing rain", "🌨️"),
        67 => WeatherCondition::new("Heavy freezing rain", "🌨️"),
        71 => WeatherCondition::new("Slight snow fall", "❄️"),
        73 => WeatherCondition::new("Moderate snow fall", "❄️"),
        75 => WeatherCondition::new("Heavy snow fall", "❄️"),
        77 => WeatherCondition::new("Snow grains", "❄️"),
        80 => WeatherCondition::new("Slight rain showers", "🌦️"),
        81 => WeatherCondition::new("Moderate rain showers", "🌧️"),
        82 => WeatherCondition::new("Violent rain showers", "🌧️"),
        85 => WeatherCondition::new("Slight snow showers", "🌨️"),
        86 => WeatherCondition::new("Heavy snow showers", "🌨️"),
        95 => WeatherCondition::new("Thunderstorm", "⛈️"),
        96 => WeatherCondition::new("Thunderstorm with slight hail", "⛈️"),
        99 => WeatherCondition::new("Thunderstorm with heavy hail", "⛈️"),
        _ => UNKNOWN,
    }
}
