use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key found in WEATHER_API_KEY")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid units '{value}'. Use: metric, imperial, or kelvin")]
pub struct ParseUnitsError {
    pub value: String,
}

/// Category of a failed weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    NotFound,
    Unauthorized,
    NetworkError,
    MalformedResponse,
    Other,
}

/// A failed weather lookup. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("City not found")]
    NotFound,

    #[error("Invalid API key")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Missing data in API response: '{missing}'")]
    MalformedResponse { missing: String },

    #[error("{0}")]
    Other(String),
}

impl QueryError {
    pub fn reason(&self) -> FailureReason {
        match self {
            QueryError::NotFound => FailureReason::NotFound,
            QueryError::Unauthorized => FailureReason::Unauthorized,
            QueryError::Network(_) => FailureReason::NetworkError,
            QueryError::MalformedResponse { .. } => FailureReason::MalformedResponse,
            QueryError::Other(_) => FailureReason::Other,
        }
    }

    pub(crate) fn missing(path: &str) -> Self {
        QueryError::MalformedResponse {
            missing: path.to_string(),
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        // Walk the source chain so "error sending request" carries the real cause.
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        if err.is_timeout() && !message.contains("timed out") {
            message.push_str(" (timed out)");
        }

        QueryError::Network(message)
    }
}
