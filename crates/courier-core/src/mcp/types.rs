//! MCP type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::{ToolAnnotations, ToolResult, ToolSchema};

/// Server information returned from `initialize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "courier".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Server capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpCapabilities {
    /// Tool capabilities
    pub tools: ToolCapabilities,
}

/// Tool capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCapabilities {
    /// Whether the tool list can change while connected
    pub list_changed: bool,
}

/// Initialize response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Protocol version
    pub protocol_version: String,
    /// Server capabilities
    pub capabilities: McpCapabilities,
    /// Server info
    pub server_info: McpServerInfo,
}

/// Tool listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    pub input_schema: Value,
    /// Behavioral hints
    pub annotations: ToolAnnotations,
}

impl From<&ToolSchema> for McpTool {
    fn from(schema: &ToolSchema) -> Self {
        Self {
            name: schema.name.clone(),
            description: schema.description.clone(),
            input_schema: schema.input_schema(),
            annotations: schema.annotations.clone(),
        }
    }
}

/// `tools/call` parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    /// Tool name
    pub name: String,
    /// Tool arguments
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// `notifications/cancelled` parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledParams {
    /// ID of the request to cancel
    pub request_id: super::protocol::RequestId,
    /// Optional reason
    #[serde(default)]
    pub reason: Option<String>,
}

/// Content types in tool results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum McpContent {
    /// Text content
    #[serde(rename = "text")]
    Text { text: String },
}

impl McpContent {
    /// Create text content
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Tool execution result as returned to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolResult {
    /// Result content
    pub content: Vec<McpContent>,
    /// Whether the execution produced an error
    #[serde(default)]
    pub is_error: bool,
}

impl From<&ToolResult> for McpToolResult {
    fn from(result: &ToolResult) -> Self {
        Self {
            content: vec![McpContent::text(result.text())],
            is_error: !result.success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolParameter;

    #[test]
    fn test_mcp_tool_from_schema() {
        let schema = ToolSchema::new(
            "list-audiences",
            "List all audiences",
            vec![ToolParameter::optional_string("cursor", "Page cursor")],
        )
        .with_annotations(ToolAnnotations::read_only("List Audiences"));

        let json = serde_json::to_value(McpTool::from(&schema)).unwrap();

        assert_eq!(json["name"], "list-audiences");
        assert_eq!(json["inputSchema"]["type"], "object");
        assert_eq!(json["annotations"]["readOnlyHint"], true);
        assert_eq!(json["annotations"]["idempotentHint"], true);
        assert_eq!(json["annotations"]["title"], "List Audiences");
    }

    #[test]
    fn test_tool_result_shape() {
        let ok = ToolResult::success("1", "send-email", "Email sent successfully!");
        let json = serde_json::to_value(McpToolResult::from(&ok)).unwrap();
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "Email sent successfully!");
        assert_eq!(json["isError"], false);

        let failed = ToolResult::error("1", "send-email", "boom");
        let result = McpToolResult::from(&failed);
        assert!(result.is_error);
        assert_eq!(result.content, vec![McpContent::text("boom")]);
    }
}
