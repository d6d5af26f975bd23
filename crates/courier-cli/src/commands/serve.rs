//! Serve command implementation

use std::sync::Arc;

use anyhow::Context;
use courier_core::config::Configuration;
use courier_core::mcp::McpServer;
use tracing::info;

/// Run the MCP server on stdin/stdout until the host closes stdin
pub async fn run(config: Configuration) -> anyhow::Result<()> {
    let registry =
        courier_tools::build_registry(Arc::new(config)).context("Failed to set up tools")?;
    info!(tools = registry.len(), "Starting Courier MCP server");

    McpServer::new(registry)
        .serve(tokio::io::stdin(), tokio::io::stdout())
        .await
        .context("MCP server failed")?;

    Ok(())
}
