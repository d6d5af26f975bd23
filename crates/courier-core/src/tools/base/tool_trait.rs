//! Core Tool trait definition

use super::error::ToolError;
use crate::tools::types::{ToolAnnotations, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Base trait for all tools
///
/// A tool is one operation offered to the host. Its schema is the contract
/// advertised in tool listings; arguments are conformed to it before
/// `execute()` runs.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "send-email")
    fn name(&self) -> &str;

    /// Get the tool's description for LLM understanding
    fn description(&self) -> &str;

    /// Get the tool's contract
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with already conformed arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is not configured, a defaulted field
    /// cannot be resolved, or the provider reports a failure.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Behavioral hints advertised to the host
    fn annotations(&self) -> ToolAnnotations {
        self.schema().annotations
    }

    /// Whether this tool only reads data without side effects
    fn is_read_only(&self) -> bool {
        self.annotations().read_only_hint
    }

    /// Conform the call arguments to the contract
    ///
    /// Called before `execute()`. The default strips unknown arguments and
    /// checks presence, shape and constraints against `schema()`.
    fn prepare(&self, call: &ToolCall) -> Result<ToolCall, ToolError> {
        self.schema().conform(call)
    }

    /// Execute the tool with timing and error handling
    ///
    /// Runs `prepare()` then `execute()`, measures execution time and
    /// converts errors to `ToolResult::from_error`. Always returns a result.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        self.execute_cancellable(call, &CancellationToken::new())
            .await
    }

    /// Like `execute_with_timing`, but stops waiting when `cancel` fires.
    ///
    /// The in-flight future is dropped on cancellation, which aborts any
    /// pending provider request.
    async fn execute_cancellable(&self, call: &ToolCall, cancel: &CancellationToken) -> ToolResult {
        let start_time = Instant::now();

        let outcome = match self.prepare(call) {
            Err(err) => Err(err),
            Ok(prepared) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(ToolError::Cancelled),
                    result = self.execute(&prepared) => result,
                }
            }
        };

        let elapsed = start_time.elapsed().as_millis() as u64;
        match outcome {
            Ok(mut result) => {
                debug!(tool = %self.name(), elapsed_ms = elapsed, "Tool call succeeded");
                result.call_id = call.id.clone();
                result.execution_time_ms = Some(elapsed);
                result
            }
            Err(err) => {
                warn!(
                    tool = %self.name(),
                    code = err.error_code(),
                    elapsed_ms = elapsed,
                    "Tool call failed: {}",
                    err
                );
                ToolResult::from_error(&call.id, self.name(), &err).with_execution_time(elapsed)
            }
        }
    }
}
