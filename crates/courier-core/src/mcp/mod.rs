//! Model Context Protocol (MCP) server surface
//!
//! Exposes a [`ToolRegistry`](crate::tools::ToolRegistry) to a host over
//! newline-delimited JSON-RPC on any async reader/writer pair (stdio in the
//! CLI).

pub mod error;
pub mod protocol;
pub mod server;
pub mod types;

pub use error::McpError;
pub use protocol::{McpMessage, McpNotification, McpRequest, McpResponse, McpRpcError, RequestId};
pub use server::McpServer;
pub use types::{McpContent, McpServerInfo, McpTool, McpToolResult};
