//! Tool system for Courier
//!
//! A tool advertises a [`ToolSchema`] (its contract) and executes
//! [`ToolCall`]s whose arguments have already been conformed to it.

pub mod base;
pub mod registry;
pub mod types;
pub mod validation;

pub use base::{Tool, ToolError};
pub use registry::ToolRegistry;
pub use types::{
    ParameterType, ToolAnnotations, ToolCall, ToolParameter, ToolResult, ToolSchema,
};
pub use validation::is_valid_email;
