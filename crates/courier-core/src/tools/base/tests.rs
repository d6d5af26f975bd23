//! Tool trait tests

use super::error::ToolError;
use super::tool_trait::Tool;
use crate::tools::types::{ToolAnnotations, ToolCall, ToolParameter, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

struct EchoTool {
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl EchoTool {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    fn slow(delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Some(delay),
        }
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes its message"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![ToolParameter::string("message", "Text to echo").non_empty()],
        )
        .with_annotations(ToolAnnotations::read_only("Echo"))
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let message = call
            .get_string("message")
            .ok_or_else(|| ToolError::MissingField("message".to_string()))?;
        Ok(ToolResult::success(&call.id, self.name(), message))
    }
}

#[tokio::test]
async fn test_execute_with_timing_success() {
    let tool = EchoTool::new();
    let call = ToolCall::from_json("c1", "echo", json!({ "message": "hello", "extra": 1 }));

    let result = tool.execute_with_timing(&call).await;

    assert!(result.success);
    assert_eq!(result.call_id, "c1");
    assert_eq!(result.text(), "hello");
    assert!(result.execution_time_ms.is_some());
}

#[tokio::test]
async fn test_validation_failure_skips_execute() {
    let tool = EchoTool::new();
    let call = ToolCall::from_json("c2", "echo", json!({ "message": "" }));

    let result = tool.execute_with_timing(&call).await;

    assert!(!result.success);
    assert_eq!(result.error_code.as_deref(), Some("TOOL_VALIDATION"));
    assert!(result.text().contains("'message' must not be empty"));
    assert_eq!(tool.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cancellation_surfaces_cancelled_error() {
    let tool = EchoTool::slow(Duration::from_secs(30));
    let call = ToolCall::from_json("c3", "echo", json!({ "message": "late" }));
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = tool.execute_cancellable(&call, &cancel).await;

    assert!(!result.success);
    assert_eq!(result.error_code.as_deref(), Some("TOOL_CANCELLED"));
    assert_eq!(result.text(), "Tool execution cancelled");
}

#[test]
fn test_annotations_come_from_schema() {
    let tool = EchoTool::new();
    assert!(tool.is_read_only());
    assert_eq!(tool.annotations().title.as_deref(), Some("Echo"));
}

#[test]
fn test_tool_error_display() {
    let err = ToolError::NotFound("missing".to_string());
    assert_eq!(err.to_string(), "Tool not found: missing");

    let err = ToolError::provider("Email failed to send", json!({ "message": "rate limited" }));
    assert_eq!(
        err.to_string(),
        r#"Email failed to send: {"message":"rate limited"}"#
    );
    assert_eq!(err.error_code(), "TOOL_PROVIDER");

    let err = ToolError::Cancelled;
    assert_eq!(err.to_string(), "Tool execution cancelled");
}
