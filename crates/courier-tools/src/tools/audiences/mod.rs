//! `list-audiences` tool

use std::sync::Arc;

use async_trait::async_trait;
use courier_core::config::Configuration;
use courier_core::tools::{Tool, ToolAnnotations, ToolCall, ToolError, ToolResult, ToolSchema};
use tracing::info;

use crate::resend::EmailProvider;
use crate::tools::credential::require_credential;
use crate::tools::format::format_audiences;

const NAME: &str = "list-audiences";
const DESCRIPTION: &str = "List all audiences from Resend";

/// Contract for `list-audiences`: no parameters
pub fn build_audience_list_schema() -> ToolSchema {
    ToolSchema::new(NAME, DESCRIPTION, Vec::new())
        .with_annotations(ToolAnnotations::read_only("List Resend Audiences"))
}

/// Lists the provider's audiences
pub struct ListAudiencesTool {
    config: Arc<Configuration>,
    provider: Arc<dyn EmailProvider>,
}

impl ListAudiencesTool {
    pub fn new(config: Arc<Configuration>, provider: Arc<dyn EmailProvider>) -> Self {
        Self { config, provider }
    }
}

#[async_trait]
impl Tool for ListAudiencesTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        build_audience_list_schema()
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        require_credential(&self.config)?;

        let audiences = self.provider.list_audiences().await?;
        info!(count = audiences.len(), "Listed audiences");

        Ok(ToolResult::success(&call.id, self.name(), format_audiences(&audiences)?)
            .with_metadata("count", audiences.len()))
    }
}
