//! Tools command implementation

use std::sync::Arc;

use anyhow::Context;
use courier_core::config::Configuration;
use courier_core::mcp::McpTool;
use serde_json::json;

/// Print the contracts a host would see from `tools/list`
pub fn show_tools(config: Configuration) -> anyhow::Result<()> {
    let registry =
        courier_tools::build_registry(Arc::new(config)).context("Failed to set up tools")?;
    let tools: Vec<McpTool> = registry.schemas().iter().map(McpTool::from).collect();

    println!("{}", serde_json::to_string_pretty(&json!({ "tools": tools }))?);
    Ok(())
}
