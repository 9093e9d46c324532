//! Turns raw forecast numbers into the text shown to the user.

use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use chrono_tz::Tz;

use crate::{
    condition::weather_condition,
    model::{DailyForecast, ForecastDay, WeatherReport},
};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const LOCAL_TIME_FORMAT: &str = "%a, %b %-d, %Y, %I:%M %p %Z";
const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// The caller's current instant together with their local UTC offset.
///
/// Everything relative ("Today", "3 hours ahead of you") is computed against
/// this, so tests can pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: DateTime<FixedOffset>,
}

impl Clock {
    pub fn system() -> Self {
        Self { now: Local::now().fixed_offset() }
    }

    pub fn fixed(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// Rounds halves towards positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `"{C}°C ({F}°F)"`. Fahrenheit is converted from the unrounded Celsius value.
pub fn format_temperature(celsius: f64) -> String {
    let fahrenheit = round_half_up(celsius * 9.0 / 5.0 + 32.0);
    format!("{}°C ({}°F)", round_half_up(celsius), fahrenheit)
}

/// "Today", "Tomorrow" or the English weekday name, by calendar date.
pub fn day_label(date: NaiveDate, clock: &Clock) -> String {
    let today = clock.today();

    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%A").to_string()
    }
}

/// Nearest of the eight compass points for a bearing in degrees.
pub fn compass_point(degrees: f64) -> &'static str {
    let index = (degrees.rem_euclid(360.0) / 45.0).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Describes an hour difference relative to the caller.
pub fn format_offset(hours: i64) -> String {
    let plural = |n: i64| if n == 1 { "" } else { "s" };

    match hours {
        0 => "Same as your timezone".to_string(),
        h if h > 0 => format!("{h} hour{} ahead of you", plural(h)),
        h => {
            let n = h.abs();
            format!("{n} hour{} behind you", plural(n))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInfo {
    pub local_time: String,
    /// Whole hours between the location's wall clock and the caller's.
    pub hours_ahead: i64,
}

impl TimeInfo {
    /// `None` when `timezone` is not a known IANA identifier.
    ///
    /// The difference compares wall clocks and rounds to whole hours, so
    /// half-hour zones come out 30 minutes off.
    pub fn for_timezone(timezone: &str, clock: &Clock) -> Option<Self> {
        let tz: Tz = match timezone.parse() {
            Ok(tz) => tz,
            Err(e) => {
                tracing::warn!("Unrecognised timezone '{}': {}", timezone, e);
                return None;
            }
        };

        let there = clock.now().with_timezone(&tz);
        let minutes = (there.naive_local() - clock.now().naive_local()).num_minutes();

        Some(Self {
            local_time: there.format(LOCAL_TIME_FORMAT).to_string(),
            hours_ahead: round_half_up(minutes as f64 / 60.0),
        })
    }

    pub fn difference(&self) -> String {
        format_offset(self.hours_ahead)
    }
}

fn format_day(day: &ForecastDay, clock: &Clock) -> String {
    let condition = weather_condition(day.weather_code);
    let label = day_label(day.date, clock);

    let rain = if day.precipitation_mm > 0.0 {
        format!("💧 Rain: {}mm", day.precipitation_mm)
    } else {
        "🌞 No rain".to_string()
    };

    let mut wind = format!("🌬️  Wind: {} km/h", round_half_up(day.wind_speed_kmh));
    if let Some(deg) = day.wind_direction_deg {
        wind.push(' ');
        wind.push_str(compass_point(deg));
    }

    format!(
        "\n{} {:<9} {}\n   High: {}  Low: {}\n   {}  {}\n",
        condition.emoji,
        label,
        condition.description,
        format_temperature(day.max_c),
        format_temperature(day.min_c),
        rain,
        wind,
    )
}

/// The "7-Day Forecast" block, at most seven days.
pub fn render_forecast(daily: &DailyForecast, clock: &Clock) -> String {
    let mut out = format!("\n📅 7-Day Forecast\n{RULE}\n");

    for day in daily.days().take(7) {
        out.push_str(&format_day(&day, clock));
    }

    out.push('\n');
    out
}

/// Full report: header with current conditions followed by the forecast.
pub fn render_report(report: &WeatherReport, clock: &Clock) -> String {
    let current = &report.forecast.current;
    let condition = weather_condition(current.weather_code);

    let (local_time, difference) = match TimeInfo::for_timezone(&report.forecast.timezone, clock) {
        Some(info) => (info.local_time.clone(), info.difference()),
        None => (
            format!("unavailable ({})", report.forecast.timezone),
            "unknown".to_string(),
        ),
    };

    let mut wind = format!("{} km/h", current.wind_speed_kmh);
    if let Some(deg) = current.wind_direction_deg {
        wind.push_str(&format!(" ({})", compass_point(deg)));
    }

    let mut out = String::new();
    out.push_str(&format!("\n🌍 Weather in {}\n{RULE}\n\n", report.location.display_name()));
    out.push_str(&format!("🕐 Local time:   {local_time}\n"));
    out.push_str(&format!("⏰ Time diff:    {difference}\n\n"));
    out.push_str(&format!("🌡️  Temperature: {}\n", format_temperature(current.temperature_c)));
    out.push_str(&format!("🌡️  Feels like:  {}\n", format_temperature(current.feels_like_c)));
    out.push_str(&format!("📊 Condition:    {}\n", condition.description));
    out.push_str(&format!("💧 Humidity:     {}%\n", current.humidity_pct));
    out.push_str(&format!("🌬️  Wind:        {wind}\n"));
    out.push_str(&format!("📈 Pressure:     {} hPa\n\n", current.pressure_hpa));
    out.push_str(&format!("{} {}\n", condition.emoji, condition.description));
    out.push_str(&render_forecast(&report.forecast.daily, clock));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentConditions, Forecast, Location};
    use chrono::{Duration, TimeZone};

    /// Friday 2026-10-16 12:00 in UTC+2.
    fn clock() -> Clock {
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let now = offset.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).single().expect("valid time");
        Clock::fixed(now)
    }

    fn utc_clock() -> Clock {
        let now = FixedOffset::east_opt(0)
            .expect("valid offset")
            .with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .single()
            .expect("valid time");
        Clock::fixed(now)
    }

    fn daily(precipitation: Vec<Option<f64>>) -> DailyForecast {
        let start = clock().today();
        let n = precipitation.len();
        DailyForecast {
            time: (0..n).map(|i| start + Duration::days(i as i64)).collect(),
            weather_code: vec![61; n],
            temperature_2m_max: vec![15.4; n],
            temperature_2m_min: vec![8.6; n],
            precipitation_sum: precipitation,
            wind_speed_10m_max: vec![19.5; n],
            wind_direction_10m_dominant: vec![],
        }
    }

    #[test]
    fn temperature_positive_fraction() {
        assert_eq!(format_temperature(21.6), "22°C (71°F)");
    }

    #[test]
    fn temperature_zero() {
        assert_eq!(format_temperature(0.0), "0°C (32°F)");
    }

    #[test]
    fn temperature_negative() {
        // -40 is the same in both scales
        assert_eq!(format_temperature(-40.0), "-40°C (-40°F)");
        // -3.7°C = 25.34°F
        assert_eq!(format_temperature(-3.7), "-4°C (25°F)");
    }

    #[test]
    fn fahrenheit_uses_unrounded_celsius() {
        // 0.4°C rounds to 0°C, but 32.72°F rounds to 33°F (not 32°F)
        assert_eq!(format_temperature(0.4), "0°C (33°F)");
    }

    #[test]
    fn temperature_rounds_halves_up_without_negative_zero() {
        assert_eq!(format_temperature(-0.5), "0°C (31°F)");
        assert_eq!(format_temperature(2.5), "3°C (37°F)");
    }

    #[test]
    fn day_labels() {
        let c = clock();
        let today = c.today();

        assert_eq!(day_label(today, &c), "Today");
        assert_eq!(day_label(today + Duration::days(1), &c), "Tomorrow");
        assert_eq!(day_label(today + Duration::days(2), &c), "Sunday");
        assert_eq!(day_label(today - Duration::days(1), &c), "Thursday");
    }

    #[test]
    fn day_label_uses_calendar_date_not_elapsed_time() {
        // 23:30 local: tomorrow is 30 minutes away but still "Tomorrow"
        let offset = FixedOffset::east_opt(0).expect("valid offset");
        let late = Clock::fixed(
            offset.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).single().expect("valid time"),
        );
        let tomorrow: NaiveDate = "2026-10-17".parse().expect("valid date");

        assert_eq!(day_label(tomorrow, &late), "Tomorrow");
    }

    #[test]
    fn offset_wording() {
        assert_eq!(format_offset(0), "Same as your timezone");
        assert_eq!(format_offset(1), "1 hour ahead of you");
        assert_eq!(format_offset(9), "9 hours ahead of you");
        assert_eq!(format_offset(-1), "1 hour behind you");
        assert_eq!(format_offset(-6), "6 hours behind you");
    }

    #[test]
    fn time_info_for_zone_ahead() {
        let info = TimeInfo::for_timezone("Asia/Tokyo", &utc_clock()).expect("known zone");

        assert_eq!(info.hours_ahead, 9);
        assert_eq!(info.local_time, "Thu, Jan 15, 2026, 09:00 PM JST");
        assert_eq!(info.difference(), "9 hours ahead of you");
    }

    #[test]
    fn time_info_for_zone_behind() {
        let info = TimeInfo::for_timezone("America/New_York", &utc_clock()).expect("known zone");
        assert_eq!(info.hours_ahead, -5);
    }

    #[test]
    fn time_info_same_zone() {
        let info = TimeInfo::for_timezone("Europe/Paris", &clock()).expect("known zone");
        assert_eq!(info.difference(), "Same as your timezone");
    }

    #[test]
    fn time_info_half_hour_zone_is_approximate() {
        // India is UTC+5:30; 5.5 rounds up to 6
        let info = TimeInfo::for_timezone("Asia/Kolkata", &utc_clock()).expect("known zone");
        assert_eq!(info.hours_ahead, 6);
    }

    #[test]
    fn time_info_unknown_zone() {
        assert!(TimeInfo::for_timezone("Mars/Olympus_Mons", &clock()).is_none());
    }

    #[test]
    fn compass_points() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(44.0), "NE");
        assert_eq!(compass_point(225.0), "SW");
        assert_eq!(compass_point(350.0), "N");
        assert_eq!(compass_point(-90.0), "W");
    }

    #[test]
    fn forecast_rain_and_no_rain() {
        let out = render_forecast(&daily(vec![Some(0.0), None, Some(3.2)]), &clock());

        assert_eq!(out.matches("🌞 No rain").count(), 2);
        assert!(out.contains("💧 Rain: 3.2mm"));
        assert!(out.contains("🌬️  Wind: 20 km/h"));
        assert!(out.contains("High: 15°C (60°F)  Low: 9°C (47°F)"));
    }

    #[test]
    fn forecast_labels_and_padding() {
        let out = render_forecast(&daily(vec![None, None, None]), &clock());

        assert!(out.contains("🌧️ Today     Slight rain"));
        assert!(out.contains("🌧️ Tomorrow  Slight rain"));
        assert!(out.contains("🌧️ Sunday    Slight rain"));
    }

    #[test]
    fn forecast_caps_at_seven_days() {
        let out = render_forecast(&daily(vec![None; 10]), &clock());
        assert_eq!(out.matches("High:").count(), 7);
    }

    #[test]
    fn forecast_shows_dominant_wind_direction() {
        let mut d = daily(vec![None]);
        d.wind_direction_10m_dominant = vec![Some(270.0)];

        let out = render_forecast(&d, &clock());
        assert!(out.contains("Wind: 20 km/h W"));
    }

    #[test]
    fn report_header() {
        let report = WeatherReport {
            location: Location {
                name: "Paris".into(),
                country: "France".into(),
                latitude: 48.8566,
                longitude: 2.3522,
            },
            forecast: Forecast {
                timezone: "Europe/Paris".into(),
                current: CurrentConditions {
                    temperature_c: 17.3,
                    feels_like_c: 16.1,
                    humidity_pct: 64.0,
                    weather_code: 2,
                    pressure_hpa: 1012.4,
                    wind_speed_kmh: 11.2,
                    wind_direction_deg: Some(225.0),
                },
                daily: daily(vec![None; 7]),
            },
        };

        let out = render_report(&report, &clock());

        assert!(out.contains("🌍 Weather in Paris, France"));
        assert!(out.contains("🕐 Local time:   Fri, Oct 16, 2026, 12:00 PM CEST"));
        assert!(out.contains("⏰ Time diff:    Same as your timezone"));
        assert!(out.contains("🌡️  Temperature: 17°C (63°F)"));
        assert!(out.contains("🌡️  Feels like:  16°C (61°F)"));
        assert!(out.contains("📊 Condition:    Partly cloudy"));
        assert!(out.contains("💧 Humidity:     64%"));
        assert!(out.contains("🌬️  Wind:        11.2 km/h (SW)"));
        assert!(out.contains("📈 Pressure:     1012.4 hPa"));
        assert!(out.contains("⛅ Partly cloudy"));
        assert!(out.contains("📅 7-Day Forecast"));
    }

    #[test]
    fn report_with_unknown_timezone_still_renders() {
        let report = WeatherReport {
            location: Location {
                name: "Nowhere".into(),
                country: String::new(),
                latitude: 0.0,
                longitude: 0.0,
            },
            forecast: Forecast {
                timezone: "Not/AZone".into(),
                current: CurrentConditions {
                    temperature_c: 25.0,
                    feels_like_c: 27.0,
                    humidity_pct: 80.0,
                    weather_code: 1234,
                    pressure_hpa: 1009.0,
                    wind_speed_kmh: 5.0,
                    wind_direction_deg: None,
                },
                daily: daily(vec![]),
            },
        };

        let out = render_report(&report, &clock());

        assert!(out.contains("🌍 Weather in Nowhere\n"));
        assert!(out.contains("Local time:   unavailable (Not/AZone)"));
        assert!(out.contains("📊 Condition:    Unknown"));
        assert!(out.contains("🌬️  Wind:        5 km/h\n"));
    }
}
