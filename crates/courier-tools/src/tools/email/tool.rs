//! `send-email` tool implementation

use std::sync::Arc;

use async_trait::async_trait;
use courier_core::config::Configuration;
use courier_core::tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
use tracing::info;

use super::contract::{DESCRIPTION, NAME, SendEmailContract};
use super::normalize::normalize_send;
use crate::resend::EmailProvider;
use crate::tools::format::format_sent;

/// Sends one email through the provider
pub struct SendEmailTool {
    config: Arc<Configuration>,
    provider: Arc<dyn EmailProvider>,
    contract: SendEmailContract,
    schema: ToolSchema,
}

impl SendEmailTool {
    /// Create the tool; the contract shape is fixed here
    pub fn new(config: Arc<Configuration>, provider: Arc<dyn EmailProvider>) -> Self {
        let contract = SendEmailContract::from_config(&config);
        let schema = contract.schema();
        Self {
            config,
            provider,
            contract,
            schema,
        }
    }

    /// The contract shape selected at construction
    pub fn contract(&self) -> SendEmailContract {
        self.contract
    }
}

#[async_trait]
impl Tool for SendEmailTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        self.schema.clone()
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let request = normalize_send(&call.arguments, &self.config)?;

        info!(to = %request.to, scheduled = request.scheduled_at.is_some(), "Sending email");
        let sent = self.provider.send_email(&request).await?;
        info!(id = %sent.id, "Email accepted by provider");

        Ok(ToolResult::success(&call.id, self.name(), format_sent(&sent)?)
            .with_metadata("email_id", sent.id))
    }
}
