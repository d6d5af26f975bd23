use courier_core::config::{API_KEY_ENV, Configuration};
use courier_core::tools::ToolError;

pub(crate) fn missing_credential() -> ToolError {
    ToolError::Configuration(format!(
        "Resend API key not configured. Please set {} environment variable.",
        API_KEY_ENV
    ))
}

/// Fail fast when no provider credential is configured
pub(crate) fn require_credential(config: &Configuration) -> Result<(), ToolError> {
    if config.has_credential() {
        Ok(())
    } else {
        Err(missing_credential())
    }
}
