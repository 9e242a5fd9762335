//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration loading from the environment
//! - The unit system shared by requests and display
//! - Abstraction over the weather provider and the OpenWeather client
//! - Shared domain models (reports, query errors)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod units;

pub use config::Config;
pub use error::{ConfigError, FailureReason, ParseUnitsError, QueryError};
pub use model::{WeatherQueryResult, WeatherReport, WindSpeed};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use units::Units;
