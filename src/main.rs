//! Onboard CLI
//!
//! Runs the onboarding wizard in a terminal and shows the resulting dashboard.

use clap::Parser;

use onboard::cli::{execute, Cli, Commands};
use onboard::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, skipped) = cli.load_config()?;

    logging::init(&config.logging)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting onboard");
    for error in &skipped {
        tracing::warn!("Ignoring config: {}", error);
    }

    execute(cli.command.unwrap_or(Commands::Run), &config)
}
