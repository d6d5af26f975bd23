//! Command routing logic for CLI

use anyhow::Context;
use courier_core::config::Configuration;

use crate::args::{Cli, Commands};
use crate::commands;

/// Resolve configuration once, then dispatch to the selected command
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let config = Configuration::from_env().context("Invalid configuration")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::run(config).await,
        Commands::Tools => commands::tools::show_tools(config),
    }
}
