use tracing::{debug, warn};

use crate::{error::ConfigError, units::Units};

pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const BASE_URL_VAR: &str = "WEATHER_BASE_URL";
pub const UNITS_VAR: &str = "WEATHER_UNITS";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` when `WEATHER_API_KEY` is unset or blank.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Unit system the session starts with.
    pub units: Units,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            units: Units::default(),
        }
    }
}

impl Config {
    /// Load `.env` from the working directory (if any), then read the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => warn!(error = %err, "failed to load .env file"),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration against an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let units = lookup(UNITS_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.parse::<Units>().unwrap_or_else(|err| {
                    warn!(%err, "ignoring {UNITS_VAR}, falling back to {}", Units::default());
                    Units::default()
                })
            })
            .unwrap_or_default();

        Self {
            api_key,
            base_url,
            units,
        }
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }
}
