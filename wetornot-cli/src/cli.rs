use std::io::{self, Write};

use clap::Parser;
use wetornot_core::{Clock, WeatherError, WeatherProvider, fetch_report, render_report};

pub const HELP: &str = r#"
🌤️  WetOrNot - Get weather information for any city

Usage:
  wetornot <city>

Examples:
  wetornot "New York"
  wetornot London
  wetornot Tokyo

Features:
  • Current weather conditions
  • 7-day weather forecast
  • Temperature in both Celsius and Fahrenheit

Note: This tool uses Open-Meteo API - completely free with no API key required!
Data provided by Open-Meteo.com
"#;

/// Top-level CLI struct.
///
/// Help is handled by hand: `-h`/`--help` anywhere on the line wins, and any
/// other token (hyphenated or not) is part of the city name.
#[derive(Debug, Parser)]
#[command(
    name = "wetornot",
    about = "Weather for any city",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// City name; multiple words are joined with single spaces.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub city: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(String),
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        let wants_help = self.city.is_empty()
            || self.city.iter().any(|arg| arg == "--help" || arg == "-h");

        if wants_help {
            Invocation::Help
        } else {
            Invocation::Run(self.city.join(" "))
        }
    }

    pub async fn run(
        self,
        provider: &dyn WeatherProvider,
        clock: &Clock,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        match self.invocation() {
            Invocation::Help => {
                write!(out, "{HELP}")?;
            }
            Invocation::Run(city) => {
                if city.trim().is_empty() {
                    return Err(WeatherError::EmptyInput.into());
                }

                writeln!(out, "🔍 Fetching weather data for \"{city}\"...")?;
                let report = fetch_report(provider, &city).await?;
                write!(out, "{}", render_report(&report, clock))?;
            }
        }

        Ok(())
    }
}

/// Prints the console message for a failed run. Help goes to `out`,
/// everything else to `err_out`.
pub fn print_error(
    err: &anyhow::Error,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> io::Result<()> {
    match err.downcast_ref::<WeatherError>() {
        Some(WeatherError::EmptyInput) => {
            writeln!(err_out, "❌ {err}")?;
            write!(out, "{HELP}")?;
        }
        Some(WeatherError::CityNotFound(_)) => {
            writeln!(
                err_out,
                "\n❌ {err}\n\
                 Please check the spelling or try a different city name.\n\
                 Examples: \"New York\", \"London\", \"Tokyo\"\n"
            )?;
        }
        Some(WeatherError::Network(source)) => {
            tracing::debug!("Network failure: {:?}", source);
            writeln!(err_out, "\n❌ {err}\nPlease check your internet connection and try again.\n")?;
        }
        Some(WeatherError::Api(_)) => {
            writeln!(err_out, "❌ {err}")?;
        }
        _ => {
            writeln!(err_out, "❌ Error: {err}")?;
        }
    }

    Ok(())
}
