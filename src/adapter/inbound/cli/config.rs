//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::sportsbook;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, API_URL_ENV};

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Set api.base_url in {}", path.display()));
    output::note("2. Run: propline books");
    output::note("3. Run: propline props --sport nba");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path, config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "file_exists": path.exists(),
            "api": {
                "base_url": config.api.base_url,
                "timeout_ms": config.api.http.timeout_ms,
                "connect_timeout_ms": config.api.http.connect_timeout_ms,
                "retry_max_attempts": config.api.http.retry_max_attempts,
                "retry_backoff_ms": config.api.http.retry_backoff_ms,
            },
            "books": config.books.selected,
            "display": {
                "breakpoint": config.display.breakpoint,
                "sort": config.display.sort.as_str(),
                "layout": config.display.layout.as_str(),
                "page_size": config.display.page_size,
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    if path.exists() {
        output::field("File", path.display());
    } else {
        output::field("File", format!("{} (not found, defaults)", path.display()));
    }

    output::section("API");
    output::field("Base URL", &config.api.base_url);
    if std::env::var(API_URL_ENV).is_ok() {
        output::note(&format!("base URL overridden by {API_URL_ENV}"));
    }
    output::field("Timeout", format!("{}ms", config.api.http.timeout_ms));
    output::field(
        "Retries",
        format!(
            "{} attempts, {}ms apart",
            config.api.http.retry_max_attempts, config.api.http.retry_backoff_ms
        ),
    );

    output::section("Sportsbooks");
    for key in &config.books.selected {
        output::note(&format!("- {} ({key})", sportsbook::title(key)));
    }

    output::section("Display");
    output::field("Breakpoint", format!("{} columns", config.display.breakpoint));
    output::field("Sort", config.display.sort);
    output::field("Layout", config.display.layout);
    output::field("Page size", config.display.page_size);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}
