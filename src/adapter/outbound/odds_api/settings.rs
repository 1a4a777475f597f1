//! Odds API connection configuration.

use serde::Deserialize;

/// Odds API endpoint and HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// Base URL of the odds REST wrapper (e.g. `http://localhost:3000/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP client settings.
    #[serde(default)]
    pub http: OddsApiHttpConfig,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".into()
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            http: OddsApiHttpConfig::default(),
        }
    }
}

/// Odds API HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient (connect/timeout) failures.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3000
}

const fn default_http_retry_max_attempts() -> u32 {
    2
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}
