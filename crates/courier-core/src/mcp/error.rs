//! MCP error types

use thiserror::Error;

/// Errors raised by the MCP server loop
#[derive(Debug, Error)]
pub enum McpError {
    /// Reading from or writing to the transport failed
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A message could not be encoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl McpError {
    /// Create a new Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &str {
        match self {
            Self::Transport { .. } => "MCP_TRANSPORT",
            Self::Serialization { .. } => "MCP_SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for McpError {
    fn from(err: std::io::Error) -> Self {
        Self::transport(err.to_string())
    }
}
