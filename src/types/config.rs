//! Configuration structures.
//!
//! One immutable value provides the remote base URL and the credential.
//! It is read once at process start and shared by every dispatch; nothing
//! else in the engine touches the environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Neutrino API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://neutrinoapi.net";

const ENV_BASE_URL: &str = "NEUTRINO_API_BASE_URL";
const ENV_API_KEY: &str = "NEUTRINO_API_KEY";
const ENV_TIMEOUT: &str = "NEUTRINO_API_TIMEOUT";

/// Adapter engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,

    /// Credential value injected into the tool's designated auth header.
    /// Absence is legal: requests go out unauthenticated and the remote
    /// service decides.
    pub api_key: Option<String>,

    /// Per-request client timeout. The caller-supplied cancellation token
    /// bounds individual dispatches; this is the hard upper bound applied
    /// to the underlying HTTP client.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `NEUTRINO_API_BASE_URL`, `NEUTRINO_API_KEY`,
    /// and `NEUTRINO_API_TIMEOUT` (humantime format, e.g. `30s`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim_end_matches('/').to_string();
            }
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
            if let Ok(duration) = humantime::parse_duration(&timeout) {
                config.request_timeout = duration;
            }
        }
        config
    }

    /// Builder-style credential override, mostly for tests and embedders
    /// that load credentials themselves.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style base URL override.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = Config::default().with_base_url("http://localhost:9999/");
        assert_eq!(config.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Config::default().with_api_key("secret");
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_url, config.base_url);
        assert_eq!(back.api_key.as_deref(), Some("secret"));
    }
}
