use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = config::CliConfig::resolve(&cli)?;
    let output = commands::run_command(&cli.command, &config)?;
    println!("{}", commands::render(&output, config.format)?);
    Ok(if output.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
