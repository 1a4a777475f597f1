//! CLI module graph and command dispatch.

pub mod catalog;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod events;
pub mod output;
pub mod paths;
pub mod props;

use std::path::Path;

use tracing::debug;

use self::command::{Cli, Commands, ConfigCommand};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap::AppContext;
use crate::infrastructure::config::settings::Config;

/// Log level after applying `-v` flags on top of the configured level.
#[must_use]
pub fn log_level(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Load the configuration file, or defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path)
}

/// Run the parsed command.
pub async fn dispatch(cli: &Cli) -> Result<()> {
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        let path = args.path.as_deref().unwrap_or(&cli.config);
        return config::execute_init(path, args.force);
    }

    let config = load_config(&cli.config)?;
    config
        .logging
        .init_with_level(&log_level(&config.logging.level, cli.verbose));
    debug!(path = %cli.config.display(), "Configuration loaded");

    match &cli.command {
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config, &config),
        Commands::Sports => catalog::sports(),
        command => {
            let ctx = AppContext::from_config(config)?;
            match command {
                Commands::Books => catalog::books(&ctx.preferences),
                Commands::Events(args) => events::execute(ctx.provider.as_ref(), args.sport).await,
                Commands::Props(args) => props::execute(&ctx, args).await,
                Commands::Watch(args) => props::watch::execute(&ctx, args).await,
                Commands::Sports | Commands::Config(_) => Ok(()),
            }
        }
    }
}

/// Report a command failure. Config parse errors are rendered with the
/// offending source span when the file can be read.
pub fn report(cli: &Cli, err: &Error) {
    if let Error::Config(ConfigError::Parse(parse)) = err {
        if !output::is_json() {
            if let Ok(src) = std::fs::read_to_string(&cli.config) {
                let name = cli.config.display().to_string();
                if let Some(diagnostic) = diagnostic::ConfigDiagnostic::from_toml(&name, &src, parse) {
                    eprintln!("{}", diagnostic::render(diagnostic));
                    return;
                }
            }
        }
    }
    output::error(&err.to_string());
    if matches!(err, Error::Fetch(fetch) if fetch.is_network()) {
        output::hint("check that the odds API is reachable (api.base_url or PROPLINE_API_URL)");
    }
}
