//! Courier: an MCP tool server for the Resend email API.
//!
//! Re-exports the workspace crates so embedders can depend on one package:
//! build a [`Configuration`], turn it into a [`ToolRegistry`] with
//! [`build_registry`], and hand that to an [`McpServer`].

pub use courier_core;
pub use courier_tools;

pub use courier_core::config::Configuration;
pub use courier_core::mcp::McpServer;
pub use courier_core::tools::{Tool, ToolRegistry};
pub use courier_tools::{build_registry, get_default_tools};
