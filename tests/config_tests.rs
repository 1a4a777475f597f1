use std::fs;

use propline::adapter::inbound::cli::config::CONFIG_TEMPLATE;
use propline::application::SortMode;
use propline::error::{ConfigError, Error};
use propline::infrastructure::config::{Config, LayoutMode};
use tempfile::TempDir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.display.breakpoint, 100);
    assert_eq!(config.display.layout, LayoutMode::Auto);
    assert_eq!(config.display.page_size, 1);
    assert!(!config.api.base_url.is_empty());
}

#[test]
fn generated_template_loads_with_default_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG_TEMPLATE).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.display.sort, SortMode::Name);
    assert_eq!(config.api.http.retry_max_attempts, 2);
    assert_eq!(
        config.books.selected,
        vec!["draftkings", "fanduel", "betmgm", "williamhill_us"]
    );
    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.display.page_size, 1);
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[books]\nselected = [\"bovada\", \"fanduel\"]\n\n[display]\nsort = \"best-over\"\nlayout = \"table\"\n",
    )
    .unwrap();

    let config = Config::load_or_default(&path).unwrap();

    assert_eq!(config.preferences().sportsbooks, vec!["bovada", "fanduel"]);
    assert_eq!(config.display.sort, SortMode::BestOver);
    assert_eq!(config.display.layout, LayoutMode::Table);
}

#[test]
fn existing_but_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\npage_size = 0\n").unwrap();

    let err = Config::load_or_default(&path).unwrap_err();

    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "page_size",
            ..
        })
    ));
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file.
    let err = Config::load(dir.path()).unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}
