use std::process::ExitCode;

use clap::Parser;
use propline::adapter::inbound::cli::command::{Cli, ColorChoice};
use propline::adapter::inbound::cli::output::{self, OutputConfig};
use propline::adapter::inbound::cli::{dispatch, report};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match dispatch(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&cli, &err);
            ExitCode::FAILURE
        }
    }
}
