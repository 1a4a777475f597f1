//! Command-line interface definitions.
//!
//! Defines the CLI structure for propline using `clap`. Every subcommand
//! shares the global output flags and the configuration path.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::application::query::SortMode;
use crate::domain::sport::Sport;
use crate::infrastructure::config::display::LayoutMode;

/// Player prop odds comparison across sportsbooks
#[derive(Parser, Debug)]
#[command(name = "propline")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported sports and their stat types
    Sports,

    /// List known sportsbooks and the current selection
    Books,

    /// List upcoming events for a sport, grouped by date
    Events(EventsArgs),

    /// Compare player prop odds for one event
    Props(PropsArgs),

    /// Keep a prop comparison refreshed on an interval
    Watch(WatchArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `propline config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Arguments for the `config init` subcommand.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path (defaults to the global --config path).
    pub path: Option<PathBuf>,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `events` subcommand.
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Sport short name or provider key (e.g. nba, basketball_nba).
    #[arg(short, long)]
    pub sport: Sport,
}

/// Arguments for the `props` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PropsArgs {
    /// Sport short name or provider key (e.g. nba, basketball_nba).
    #[arg(short, long)]
    pub sport: Sport,

    /// Event id (defaults to the earliest upcoming event).
    #[arg(short, long)]
    pub event: Option<String>,

    /// Stat type market key (defaults to the sport's first stat type).
    #[arg(long)]
    pub stat: Option<String>,

    /// Comma-separated sportsbook ids, replacing the configured selection.
    #[arg(short, long, value_delimiter = ',')]
    pub books: Vec<String>,

    /// Case-insensitive filter on player or team.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Ordering [name, best-over] (defaults to the configured sort).
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// Layout [auto, table, cards] (defaults to the configured layout).
    #[arg(long)]
    pub layout: Option<LayoutMode>,

    /// Page shown in the card layout, starting at 1.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub props: PropsArgs,

    /// Seconds between refreshes.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}
