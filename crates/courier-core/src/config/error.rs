//! Configuration error type

use thiserror::Error;

/// Errors raised while resolving configuration.
///
/// A missing credential is deliberately not represented here: it is a
/// degraded state handled per invocation, not a startup failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be parsed
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Create a new InvalidValue error
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &str {
        match self {
            Self::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}
