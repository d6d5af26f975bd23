//! Courier core: configuration, the tool framework and the MCP server surface.

pub mod config;
pub mod mcp;
pub mod tools;

pub use config::{ApiKey, ConfigError, Configuration};
pub use mcp::{McpError, McpServer};
pub use tools::{Tool, ToolCall, ToolError, ToolRegistry, ToolResult, ToolSchema};
