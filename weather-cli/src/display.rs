//! Human-readable rendering of query results.
//!
//! Formatting produces plain text; colour is applied separately by [`paint`]
//! so the formatted output stays easy to assert on.

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use weather_core::{QueryError, Units, WeatherQueryResult, WeatherReport, WindSpeed};

const RULE_WIDTH: usize = 50;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `result`, stamped with the current local time.
pub fn format_result(result: &WeatherQueryResult, units: Units) -> String {
    format_result_at(result, units, Local::now())
}

pub fn format_result_at(result: &WeatherQueryResult, units: Units, now: DateTime<Local>) -> String {
    match result {
        Ok(report) => format_report(report, units, now),
        Err(err) => format_failure(err),
    }
}

fn format_report(report: &WeatherReport, units: Units, now: DateTime<Local>) -> String {
    let symbol = units.temperature_symbol();
    let wind = match report.wind_speed {
        WindSpeed::Reported(_) => format!("{} {}", report.wind_speed, units.wind_speed_unit()),
        WindSpeed::Unavailable => report.wind_speed.to_string(),
    };

    format!(
        "Weather Information for {city}, {country}\n\
         {rule}\n\
         Temperature: {temp}{symbol} (feels like {feels}{symbol})\n\
         Condition: {condition}\n\
         Humidity: {humidity}%\n\
         Pressure: {pressure} hPa\n\
         Wind Speed: {wind}\n\
         Updated: {updated}",
        city = report.city_name,
        country = report.country_code,
        rule = "=".repeat(RULE_WIDTH),
        temp = report.temperature,
        feels = report.feels_like,
        condition = title_case(&report.condition),
        humidity = report.humidity_pct,
        pressure = report.pressure_hpa,
        updated = now.format(TIMESTAMP_FORMAT),
    )
}

pub fn format_failure(err: &QueryError) -> String {
    format!("Error: {err}")
}

/// Upper-case the first letter of every word and lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

pub fn paint(result: &WeatherQueryResult, text: &str) -> ColoredString {
    match result {
        Ok(_) => text.cyan(),
        Err(_) => text.red(),
    }
}

pub fn welcome_banner() -> String {
    format!(
        "Welcome to the Weather App!\n\
         Type 'help' for commands or enter a city name to get weather info.\n\
         Type 'quit' or 'exit' to exit the app.\n\
         {}",
        "-".repeat(60)
    )
}

pub fn missing_key_guidance() -> String {
    "Error: No API key found!\n\
     Please:\n\
     1. Copy .env.example to .env (or export WEATHER_API_KEY)\n\
     2. Get a free API key from https://openweathermap.org/api\n\
     3. Set WEATHER_API_KEY=<your key> in the .env file"
        .to_string()
}

pub const HELP_TEXT: &str = "\
Weather App - Help
========================================
Commands:
  help                            - Show this help message
  quit/exit/q                     - Exit the application
  units <metric/imperial/kelvin>  - Change temperature units
  <city name>                     - Get weather for a city

Examples:
  London
  New York
  units imperial

Note: You need a free API key from https://openweathermap.org/api";

pub const FAREWELL: &str = "Goodbye! Thanks for using Weather App!";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report() -> WeatherReport {
        WeatherReport {
            city_name: "London".to_string(),
            country_code: "GB".to_string(),
            temperature: 15.3,
            feels_like: 14.0,
            humidity_pct: 72.0,
            pressure_hpa: 1013.0,
            condition: "light rain".to_string(),
            wind_speed: WindSpeed::Reported(4.6),
        }
    }

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 1, 12, 30, 5)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn success_block_contains_every_field() {
        let text = format_result_at(&Ok(report()), Units::Metric, noon());

        assert!(text.starts_with("Weather Information for London, GB\n"));
        assert!(text.contains("Temperature: 15.3°C (feels like 14°C)"));
        assert!(text.contains("Condition: Light Rain"));
        assert!(text.contains("Humidity: 72%"));
        assert!(text.contains("Pressure: 1013 hPa"));
        assert!(text.contains("Wind Speed: 4.6 m/s"));
        assert!(text.ends_with("Updated: 2024-03-01 12:30:05"));
    }

    #[test]
    fn symbols_follow_session_units() {
        let text = format_result_at(&Ok(report()), Units::Imperial, noon());
        assert!(text.contains("15.3°F"));
        assert!(text.contains("4.6 mph"));

        let text = format_result_at(&Ok(report()), Units::Kelvin, noon());
        assert!(text.contains("15.3K (feels like 14K)"));
    }

    #[test]
    fn unavailable_wind_has_no_unit() {
        let mut report = report();
        report.wind_speed = WindSpeed::Unavailable;

        let text = format_result_at(&Ok(report), Units::Metric, noon());
        assert!(text.contains("Wind Speed: N/A\n"));
    }

    #[test]
    fn formatting_is_stable_for_identical_input() {
        let result = Ok(report());
        assert_eq!(
            format_result_at(&result, Units::Metric, noon()),
            format_result_at(&result, Units::Metric, noon())
        );
    }

    #[test]
    fn failures_render_one_line() {
        let cases = [
            (QueryError::NotFound, "Error: City not found"),
            (QueryError::Unauthorized, "Error: Invalid API key"),
            (
                QueryError::Network("timed out".into()),
                "Error: Network error: timed out",
            ),
            (
                QueryError::MalformedResponse {
                    missing: "sys.country".into(),
                },
                "Error: Missing data in API response: 'sys.country'",
            ),
            (
                QueryError::Other("API request failed with status code: 503".into()),
                "Error: API request failed with status code: 503",
            ),
        ];

        for (err, expected) in cases {
            let text = format_result(&Err(err), Units::Metric);
            assert_eq!(text, expected);
            assert!(!text.contains('\n'));
        }
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("OVERCAST CLOUDS"), "Overcast Clouds");
        let storm = title_case("thunderstorm with heavy drizzle");
        assert_eq!(storm, "Thunderstorm With Heavy Drizzle");
        assert_eq!(title_case("smoke/haze"), "Smoke/Haze");
        assert_eq!(title_case(""), "");
    }
}
