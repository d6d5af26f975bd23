//! Courier CLI
//!
//! Runs the `list-audiences` / `send-email` MCP server on stdio.
//!
//! ```bash
//! RESEND_API_KEY=re_... courier            # serve (default)
//! courier tools                            # print the tool contracts
//! courier --env-file prod.env serve
//! ```
//!
//! stdout carries the protocol, so all logs go to stderr. Set `RUST_LOG`
//! to control verbosity.

mod args;
mod commands;
mod env_file;
mod router;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, LogFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Before logging, so a RUST_LOG from the file takes effect
    let loaded = env_file::load(cli.env_file.as_deref())?;

    init_logging(cli.log_format);
    if let Some(path) = loaded {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    router::route(cli).await
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
