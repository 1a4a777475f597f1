//! Display settings for prop rendering.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::application::query::SortMode;

/// How the prop list is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Table when the terminal is at least `breakpoint` columns wide, cards
    /// otherwise.
    #[default]
    Auto,
    Table,
    Cards,
}

impl LayoutMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Table => "table",
            Self::Cards => "cards",
        }
    }

    /// Resolve `Auto` against a terminal width. An unknown width picks the
    /// table.
    #[must_use]
    pub fn resolve(self, width: Option<u16>, breakpoint: u16) -> Self {
        match self {
            Self::Auto => match width {
                Some(width) if width < breakpoint => Self::Cards,
                _ => Self::Table,
            },
            fixed => fixed,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "table" => Ok(Self::Table),
            "cards" | "card" => Ok(Self::Cards),
            other => Err(format!("unknown layout '{other}' (expected auto, table or cards)")),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Terminal width, in columns, at which the table replaces cards.
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u16,
    /// Default prop ordering.
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default)]
    pub layout: LayoutMode,
    /// Cards shown per page in the card layout. One player at a time by default.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn default_breakpoint() -> u16 {
    100
}

const fn default_page_size() -> usize {
    1
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            breakpoint: default_breakpoint(),
            sort: SortMode::default(),
            layout: LayoutMode::default(),
            page_size: default_page_size(),
        }
    }
}

/// Terminal width from the `COLUMNS` environment variable.
#[must_use]
pub fn terminal_width() -> Option<u16> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse().ok())
}
