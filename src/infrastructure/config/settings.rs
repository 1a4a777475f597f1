//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every field has a default, so an
//! absent file yields a usable configuration. `PROPLINE_API_URL` overrides the
//! configured API base URL.
//!
//! # Example
//!
//! ```no_run
//! use propline::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::display::DisplayConfig;
use super::logging::LoggingConfig;
use crate::adapter::outbound::odds_api::OddsApiConfig;
use crate::application::preferences::Preferences;
use crate::domain::sportsbook;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "PROPLINE_API_URL";

/// Sportsbook selection.
#[derive(Debug, Clone, Deserialize)]
pub struct BooksConfig {
    /// Sportsbook ids shown and requested, in display order.
    #[serde(default = "default_selected_books")]
    pub selected: Vec<String>,
}

fn default_selected_books() -> Vec<String> {
    Preferences::default().sportsbooks
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            selected: default_selected_books(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Odds REST wrapper connection settings.
    #[serde(default)]
    pub api: OddsApiConfig,

    /// Sportsbooks selected for display.
    #[serde(default)]
    pub books: BooksConfig,

    /// Layout and ordering defaults.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is unreadable, malformed or
    /// invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        debug!(path = %path.display(), "Config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that required fields are present and values are within
    /// acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(err) = url::Url::parse(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: err.to_string(),
            }
            .into());
        }
        if self.api.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.display.breakpoint == 0 {
            return Err(ConfigError::InvalidValue {
                field: "breakpoint",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.display.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Err(err) = sportsbook::validate_selection(&self.books.selected) {
            return Err(ConfigError::InvalidValue {
                field: "books.selected",
                reason: err.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initial sportsbook preferences.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            sportsbooks: self.books.selected.clone(),
        }
    }

    /// Initialize the tracing subscriber with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
