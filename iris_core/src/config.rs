//! # Client Configuration
//!
//! Where the prediction endpoint lives and how the HTTP client is built.
//! Defaults point at the hosted classifier; `IRIS_API_URL` and
//! `IRIS_TIMEOUT_SECS` override them, and the CLI flags override those.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::{IrisError, IrisResult};

/// Default prediction endpoint
pub const DEFAULT_ENDPOINT: &str = "https://gamageg-iris-classifier.hf.space/predict";

/// Environment variable overriding the endpoint
pub const ENV_API_URL: &str = "IRIS_API_URL";

/// Environment variable setting a request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "IRIS_TIMEOUT_SECS";

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prediction client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the prediction endpoint
    pub endpoint: String,

    /// Per-request timeout. `None` leaves the transport default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            user_agent: format!("IrisClassifier/{}", CURRENT_VERSION),
        }
    }
}

/// Values that take precedence over the environment, such as CLI flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> IrisResult<Self> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Defaults overlaid with the process environment, then `overrides`
    pub fn from_env_with(overrides: &ConfigOverrides) -> IrisResult<Self> {
        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Defaults overlaid with values from `lookup` (env-var style keys)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> IrisResult<Self> {
        Self::resolve(lookup, &ConfigOverrides::default())
    }

    /// Defaults, then `lookup`, then `overrides`.
    ///
    /// An overridden setting is never read from `lookup`, so a bad
    /// environment value cannot fail a run that replaces it. The endpoint is
    /// validated once, after every layer is applied.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>, overrides: &ConfigOverrides) -> IrisResult<Self> {
        let mut config = ClientConfig::default();

        if let Some(endpoint) = &overrides.endpoint {
            config.endpoint = endpoint.trim().to_string();
        } else if let Some(endpoint) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if overrides.timeout_secs.is_some() {
            config.timeout_secs = overrides.timeout_secs;
        } else if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                IrisError::config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            config.timeout_secs = Some(secs);
        }

        config.endpoint_url()?;
        Ok(config)
    }

    /// Builder-style endpoint override
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Parsed endpoint URL
    pub fn endpoint_url(&self) -> IrisResult<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| IrisError::config(format!("invalid endpoint '{}': {}", self.endpoint, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(IrisError::config(format!(
                "endpoint '{}' must use http or https, not {}",
                self.endpoint, other
            ))),
        }
    }

    /// Health URL: the endpoint with its last path segment replaced by `health`
    pub fn health_url(&self) -> IrisResult<Url> {
        let mut url = self.endpoint_url()?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| IrisError::config(format!("endpoint '{}' cannot have a path", self.endpoint)))?
            .pop_if_empty()
            .pop()
            .push("health");
        Ok(url)
    }
}
