//! Base trait and types for tools
//!
//! - [`Tool`] - The trait every operation exposed to the host implements
//! - [`ToolError`] - The failure taxonomy shared by all tools
//!
//! # Examples
//!
//! ```no_run
//! use courier_core::tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
//! use async_trait::async_trait;
//!
//! struct PingTool;
//!
//! #[async_trait]
//! impl Tool for PingTool {
//!     fn name(&self) -> &str { "ping" }
//!     fn description(&self) -> &str { "Replies with pong" }
//!     fn schema(&self) -> ToolSchema {
//!         ToolSchema::new(self.name(), self.description(), vec![])
//!     }
//!     async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
//!         Ok(ToolResult::success(&call.id, self.name(), "pong"))
//!     }
//! }
//! ```

pub mod error;
pub mod tool_trait;

#[cfg(test)]
mod tests;

pub use error::ToolError;
pub use tool_trait::Tool;
