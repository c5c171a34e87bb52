//! Process-wide settings, read once when the server starts.
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const UPSTREAM_BASE_URL: &str = "PYTHONANYWHERE_API_BASE_URL";
pub const UPSTREAM_API_KEY: &str = "PYTHONANYWHERE_API_KEY";
pub const BACKEND_BASE_URL: &str = "BACKEND_API_URL";
pub const SUBMISSION_TOKEN: &str = "REVIEW_SUBMISSION_TOKEN";
pub const APIFY_API_KEY: &str = "APIFY_API_KEY";
pub const APIFY_API_URL: &str = "APIFY_API_URL";
pub const APIFY_MAX_PLACES: &str = "APIFY_MAX_PLACES";

pub const DEFAULT_APIFY_API_URL: &str = "https://api.apify.com/v2";
pub const DEFAULT_MAX_PLACES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub upstream_base_url: String,
    pub upstream_api_key: String,
    pub backend_base_url: String,
    pub submission_token: Option<String>,
    pub aggregator: AggregatorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub max_places: u32,
}

/// The part of [`AppConfig`] the browser needs to talk to the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_base_url: String,
    pub submission_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let max_places = match get(APIFY_MAX_PLACES) {
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber { key: APIFY_MAX_PLACES, value })?,
            None => DEFAULT_MAX_PLACES,
        };

        Ok(Self {
            upstream_base_url: base_url(UPSTREAM_BASE_URL, required(UPSTREAM_BASE_URL)?)?,
            upstream_api_key: required(UPSTREAM_API_KEY)?,
            backend_base_url: base_url(BACKEND_BASE_URL, required(BACKEND_BASE_URL)?)?,
            submission_token: get(SUBMISSION_TOKEN),
            aggregator: AggregatorConfig {
                api_key: get(APIFY_API_KEY),
                base_url: base_url(
                    APIFY_API_URL,
                    get(APIFY_API_URL).unwrap_or_else(|| DEFAULT_APIFY_API_URL.to_string()),
                )?,
                max_places,
            },
        })
    }

    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            backend_base_url: self.backend_base_url.clone(),
            submission_token: self.submission_token.clone(),
        }
    }
}

fn base_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { key, value });
    }
    Ok(value.trim_end_matches('/').to_string())
}
