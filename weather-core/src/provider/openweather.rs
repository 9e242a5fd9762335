use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::{
    error::QueryError,
    model::{WeatherQueryResult, WeatherReport, WindSpeed},
    units::Units,
};

use super::WeatherProvider;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        Ok(Self {
            api_key,
            base_url,
            http: http_client(REQUEST_TIMEOUT)?,
        })
    }

    /// Replace the request timeout (10 seconds by default).
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = http_client(timeout)?;
        Ok(self)
    }

    /// Request URL for `city`, with every query value percent-escaped.
    pub fn build_url(&self, city: &str, units: Units) -> Result<Url, QueryError> {
        let params = [
            ("q", city.trim()),
            ("appid", self.api_key.as_str()),
            ("units", units.as_str()),
        ];

        Url::parse_with_params(&self.base_url, &params)
            .map_err(|err| QueryError::Other(format!("Invalid API base URL: {err}")))
    }
}

fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, city: &str, units: Units) -> WeatherQueryResult {
        let url = self.build_url(city, units)?;
        debug!(city = city.trim(), %units, "requesting current weather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "received weather response");

        classify_response(status, &body)
    }
}

/// Map an HTTP status and body onto a query result.
pub fn classify_response(status: StatusCode, body: &str) -> WeatherQueryResult {
    match status {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => return Err(QueryError::NotFound),
        StatusCode::UNAUTHORIZED => return Err(QueryError::Unauthorized),
        other => {
            return Err(QueryError::Other(format!(
                "API request failed with status code: {}",
                other.as_u16()
            )));
        }
    }

    let parsed: OwCurrentResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(err) => {
            let snippet = truncate_body(body);
            let detail = format!("Failed to parse weather response: {err} ({snippet})");
            return Err(QueryError::Other(detail));
        }
    };

    parsed.into_report()
}

// Every field is optional so a missing key can be reported by path instead of
// surfacing as a generic serde error.
#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
    wind_speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    sys: Option<OwSys>,
    main: Option<OwMain>,
    weather: Option<Vec<OwWeather>>,
    wind: Option<OwWind>,
}

impl OwCurrentResponse {
    fn into_report(self) -> WeatherQueryResult {
        let city_name = require(self.name, "name")?;
        let sys = require(self.sys, "sys")?;
        let country_code = require(sys.country, "sys.country")?;

        let main = require(self.main, "main")?;
        let temperature = require(main.temp, "main.temp")?;
        let feels_like = require(main.feels_like, "main.feels_like")?;
        let humidity_pct = require(main.humidity, "main.humidity")?;
        let pressure_hpa = require(main.pressure, "main.pressure")?;

        let weather = require(self.weather, "weather")?;
        let first = require(weather.into_iter().next(), "weather[0]")?;
        let condition = require(first.description, "weather[0].description")?;

        let nested = self.wind.and_then(|wind| wind.speed);
        let wind_speed = match main.wind_speed.or(nested) {
            Some(speed) => WindSpeed::Reported(speed),
            None => {
                warn!(city = %city_name, "response has neither main.wind_speed nor wind.speed");
                WindSpeed::Unavailable
            }
        };

        Ok(WeatherReport {
            city_name,
            country_code,
            temperature,
            feels_like,
            humidity_pct,
            pressure_hpa,
            condition,
            wind_speed,
        })
    }
}

fn require<T>(value: Option<T>, path: &str) -> Result<T, QueryError> {
    value.ok_or_else(|| QueryError::missing(path))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
