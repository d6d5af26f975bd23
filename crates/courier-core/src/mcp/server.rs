//! Stdio MCP server
//!
//! Requests other than `tools/call` are answered inline. Tool calls run as
//! separate tasks so that `notifications/cancelled` can be read while a call
//! is waiting on the provider. Responses are funneled through one writer
//! task, one JSON document per line.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::McpError;
use super::protocol::{
    MCP_PROTOCOL_VERSION, McpMessage, McpNotification, McpRequest, McpResponse, McpRpcError,
    RequestId, methods,
};
use super::types::{
    CallToolParams, CancelledParams, InitializeResult, McpCapabilities, McpServerInfo, McpTool,
    McpToolResult,
};
use crate::tools::{ToolCall, ToolError, ToolRegistry};

/// MCP server over a tool registry
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: McpServerInfo,
    in_flight: Arc<Mutex<HashMap<RequestId, CancellationToken>>>,
}

impl McpServer {
    /// Create a server exposing the given tools
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            info: McpServerInfo::default(),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Tools exposed by this server
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve until the reader reaches EOF.
    ///
    /// Lines that are not UTF-8 or not JSON are answered with a parse error
    /// and serving continues. In-flight tool calls are allowed to finish
    /// before returning, also when reading fails.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<(), McpError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<McpResponse>();

        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(response) = rx.recv().await {
                let line = serde_json::to_string(&response)?;
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<(), McpError>(())
        });

        info!(tools = ?self.registry.tool_names(), "MCP server listening on stdio");

        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut calls = JoinSet::new();
        let mut read_error = None;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!("Failed to read from transport: {}", err);
                    read_error = Some(McpError::from(err));
                    break;
                }
            }

            let response = match std::str::from_utf8(&buf).map(str::trim) {
                Ok("") => None,
                Err(err) => Some(McpResponse::error(None, McpRpcError::parse_error(err))),
                Ok(line) => match decode(line) {
                    Ok(McpMessage::Request(request)) if request.method == methods::TOOLS_CALL => {
                        match self.register_call(&request.id) {
                            Some(cancel) => {
                                let server = self.clone();
                                let tx = tx.clone();
                                calls.spawn(async move {
                                    let response =
                                        server.call_tool(request.id, request.params, cancel).await;
                                    let _ = tx.send(response);
                                });
                                None
                            }
                            None => Some(duplicate_call(request.id)),
                        }
                    }
                    Ok(McpMessage::Request(request)) => {
                        Some(self.handle_request(request).await)
                    }
                    Ok(McpMessage::Notification(notification)) => {
                        self.handle_notification(notification);
                        None
                    }
                    Err(err) => Some(McpResponse::error(None, err)),
                },
            };

            if let Some(response) = response {
                if let Some(err) = &response.error {
                    warn!(code = err.code, "Rejected message: {}", err.message);
                }
                if tx.send(response).is_err() {
                    break;
                }
            }

            while calls.try_join_next().is_some() {}
        }

        debug!("Input closed, waiting for {} in-flight call(s)", calls.len());
        while calls.join_next().await.is_some() {}

        drop(tx);
        writer_task
            .await
            .map_err(|e| McpError::transport(format!("writer task failed: {}", e)))??;

        if let Some(err) = read_error {
            return Err(err);
        }
        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one raw line; returns the response to write, if any
    pub async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        match decode(line) {
            Ok(McpMessage::Request(request)) => Some(self.handle_request(request).await),
            Ok(McpMessage::Notification(notification)) => {
                self.handle_notification(notification);
                None
            }
            Err(err) => Some(McpResponse::error(None, err)),
        }
    }

    /// Handle a single request
    pub async fn handle_request(&self, request: McpRequest) -> McpResponse {
        debug!(id = %request.id, method = %request.method, "Handling request");

        match request.method.as_str() {
            methods::INITIALIZE => self.initialize(request.id, request.params.as_ref()),
            methods::PING => McpResponse::success(request.id, json!({})),
            methods::TOOLS_LIST => self.list_tools(request.id),
            methods::TOOLS_CALL => match self.register_call(&request.id) {
                Some(cancel) => self.call_tool(request.id, request.params, cancel).await,
                None => duplicate_call(request.id),
            },
            other => McpResponse::error(Some(request.id), McpRpcError::method_not_found(other)),
        }
    }

    /// Handle a notification
    pub fn handle_notification(&self, notification: McpNotification) {
        match notification.method.as_str() {
            methods::INITIALIZED => debug!("Client initialized"),
            methods::CANCELLED => {
                let params = notification
                    .params
                    .map(serde_json::from_value::<CancelledParams>);
                match params {
                    Some(Ok(params)) => self.cancel_call(&params.request_id, params.reason),
                    _ => warn!("Ignoring malformed cancellation notification"),
                }
            }
            other => debug!(method = %other, "Ignoring notification"),
        }
    }

    fn initialize(&self, id: RequestId, params: Option<&Value>) -> McpResponse {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(MCP_PROTOCOL_VERSION)
            .to_string();

        let result = InitializeResult {
            protocol_version,
            capabilities: McpCapabilities::default(),
            server_info: self.info.clone(),
        };
        to_response(id, &result)
    }

    fn list_tools(&self, id: RequestId) -> McpResponse {
        let tools: Vec<McpTool> = self.registry.schemas().iter().map(McpTool::from).collect();
        McpResponse::success(id, json!({ "tools": tools }))
    }

    async fn call_tool(
        &self,
        id: RequestId,
        params: Option<Value>,
        cancel: CancellationToken,
    ) -> McpResponse {
        let response = self.run_tool(&id, params, &cancel).await;
        self.in_flight.lock().remove(&id);
        response
    }

    async fn run_tool(
        &self,
        id: &RequestId,
        params: Option<Value>,
        cancel: &CancellationToken,
    ) -> McpResponse {
        let params = match params.map(serde_json::from_value::<CallToolParams>) {
            Some(Ok(params)) => params,
            Some(Err(err)) => {
                return McpResponse::error(Some(id.clone()), McpRpcError::invalid_params(err));
            }
            None => {
                return McpResponse::error(
                    Some(id.clone()),
                    McpRpcError::invalid_params("missing tool name"),
                );
            }
        };

        let Some(tool) = self.registry.get(&params.name).cloned() else {
            let err = ToolError::NotFound(params.name);
            let rpc_error =
                McpRpcError::invalid_params(&err).with_data(json!({ "code": err.error_code() }));
            return McpResponse::error(Some(id.clone()), rpc_error);
        };

        info!(id = %id, tool = %params.name, "Calling tool");
        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let call = ToolCall::from_json(id.to_string(), params.name, arguments);
        let result = tool.execute_cancellable(&call, cancel).await;

        to_response(id.clone(), &McpToolResult::from(&result))
    }

    /// Track a new call; `None` when a call with this id is still running
    fn register_call(&self, id: &RequestId) -> Option<CancellationToken> {
        match self.in_flight.lock().entry(id.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => Some(slot.insert(CancellationToken::new()).clone()),
        }
    }

    fn cancel_call(&self, id: &RequestId, reason: Option<String>) {
        match self.in_flight.lock().get(id) {
            Some(token) => {
                info!(id = %id, reason = ?reason, "Cancelling tool call");
                token.cancel();
            }
            None => debug!(id = %id, "Cancellation for unknown or finished request"),
        }
    }
}

fn duplicate_call(id: RequestId) -> McpResponse {
    let detail = format!("request id {} is already in flight", id);
    McpResponse::error(Some(id), McpRpcError::invalid_request(detail))
}

/// Invalid JSON is a parse error; valid JSON of the wrong shape is an
/// invalid request
fn decode(line: &str) -> Result<McpMessage, McpRpcError> {
    let value: Value = serde_json::from_str(line).map_err(McpRpcError::parse_error)?;
    serde_json::from_value(value).map_err(McpRpcError::invalid_request)
}

fn to_response<T: serde::Serialize>(id: RequestId, result: &T) -> McpResponse {
    match serde_json::to_value(result) {
        Ok(value) => McpResponse::success(id, value),
        Err(err) => McpResponse::error(Some(id), McpRpcError::internal_error(err)),
    }
}
