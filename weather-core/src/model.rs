use std::fmt;

use crate::error::QueryError;

/// Current conditions for one city, values as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city_name: String,
    pub country_code: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub condition: String,
    pub wind_speed: WindSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindSpeed {
    Reported(f64),
    Unavailable,
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindSpeed::Reported(speed) => write!(f, "{speed}"),
            WindSpeed::Unavailable => f.write_str("N/A"),
        }
    }
}

pub type WeatherQueryResult = Result<WeatherReport, QueryError>;
