//! CLI integration tests. None of these reach the network.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn propline() -> Command {
    let mut cmd = cargo_bin_cmd!("propline");
    cmd.env_remove("PROPLINE_API_URL").env_remove("RUST_LOG");
    cmd
}

/// Config path inside a fresh temp dir. The file does not exist yet.
fn missing_config(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

#[test]
fn help_lists_commands() {
    propline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sports"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("props"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn version_names_binary() {
    propline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("propline"));
}

#[test]
fn sports_lists_stat_types() {
    let dir = TempDir::new().unwrap();
    propline()
        .args(["--color", "never", "sports", "--config"])
        .arg(missing_config(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("basketball_nba"))
        .stdout(predicate::str::contains("player_points"))
        .stdout(predicate::str::contains("icehockey_nhl"));
}

#[test]
fn sports_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = propline()
        .args(["--json", "sports", "--config"])
        .arg(missing_config(&dir))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "sports");
    assert_eq!(value["sports"].as_array().map(Vec::len), Some(8));
}

#[test]
fn books_marks_default_selection() {
    let dir = TempDir::new().unwrap();
    let output = propline()
        .args(["--json", "books", "--config"])
        .arg(missing_config(&dir))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["selected"],
        serde_json::json!(["draftkings", "fanduel", "betmgm", "williamhill_us"])
    );
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    propline()
        .args(["--color", "never", "config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    propline()
        .args(["--color", "never", "config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    propline()
        .args(["--json", "config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"file_exists\":true"))
        .stdout(predicate::str::contains("\"breakpoint\":100"));
}

#[test]
fn unknown_sport_is_rejected() {
    propline()
        .args(["events", "--sport", "cricket"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cricket"));
}

#[test]
fn malformed_config_points_at_the_problem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\nbreakpoint = \"wide\"\n").unwrap();

    propline()
        .args(["--color", "never", "sports", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("breakpoint"));
}

#[test]
fn invalid_book_in_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[books]\nselected = [\"nosuchbook\"]\n").unwrap();

    propline()
        .args(["--color", "never", "books", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nosuchbook"));
}

#[test]
fn watch_rejects_zero_interval() {
    propline()
        .args(["watch", "--sport", "nba", "--interval", "0"])
        .assert()
        .failure();
}
