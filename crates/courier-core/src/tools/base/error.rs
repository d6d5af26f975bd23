//! Error types for tool operations

use serde_json::Value;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Provider credential is not configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A defaulted field could not be resolved from caller input or defaults
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The provider rejected the request or could not be reached
    #[error("{message}: {details}")]
    Provider {
        message: String,
        /// Provider payload, kept verbatim for diagnosis
        details: Value,
    },

    /// Arguments do not satisfy the tool's contract
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Cancelled by the host
    #[error("Tool execution cancelled")]
    Cancelled,

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a Provider error
    pub fn provider(message: impl Into<String>, details: Value) -> Self {
        Self::Provider {
            message: message.into(),
            details,
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &str {
        match self {
            ToolError::Configuration(_) => "TOOL_CONFIGURATION",
            ToolError::MissingField(_) => "TOOL_MISSING_FIELD",
            ToolError::Provider { .. } => "TOOL_PROVIDER",
            ToolError::Validation(_) => "TOOL_VALIDATION",
            ToolError::NotFound(_) => "TOOL_NOT_FOUND",
            ToolError::Cancelled => "TOOL_CANCELLED",
            ToolError::Json(_) => "TOOL_JSON",
        }
    }

    /// Provider payload, if this is a provider failure
    pub fn provider_details(&self) -> Option<&Value> {
        match self {
            ToolError::Provider { details, .. } => Some(details),
            _ => None,
        }
    }
}
