//! Resend-backed tools for Courier: `list-audiences` and `send-email`.

pub mod resend;
pub mod tools;

pub use resend::{EmailProvider, ResendClient};
pub use tools::{ListAudiencesTool, SendEmailTool};

use std::sync::Arc;

use courier_core::config::Configuration;
use courier_core::tools::{Tool, ToolError, ToolRegistry};

/// The tools Courier offers, sharing one configuration and provider
pub fn get_default_tools(
    config: Arc<Configuration>,
    provider: Arc<dyn EmailProvider>,
) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(ListAudiencesTool::new(config.clone(), provider.clone())),
        Arc::new(SendEmailTool::new(config, provider)),
    ]
}

/// Registry of the default tools backed by the Resend HTTP API
pub fn build_registry(config: Arc<Configuration>) -> Result<ToolRegistry, ToolError> {
    let provider: Arc<dyn EmailProvider> = Arc::new(ResendClient::new(&config)?);
    Ok(get_default_tools(config, provider).into_iter().collect())
}
