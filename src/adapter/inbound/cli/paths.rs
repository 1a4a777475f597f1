//! Path utilities for propline.
//!
//! Configuration lives under `~/.propline/`:
//! - `~/.propline/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the propline home directory (`~/.propline/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".propline")
}

/// Returns the default config file path (`~/.propline/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
