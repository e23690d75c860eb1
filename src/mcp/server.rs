//! MCP Server implementation
//!
//! Dispatches JSON-RPC messages received over HTTP. Each message is handled
//! on its own: there is no session state between requests.

use std::sync::Arc;

use serde_json::Value;

use crate::config::app;
use crate::error::{McpError, Result, ToolError};
use crate::mcp::types::*;
use crate::tools::ToolRegistry;

/// Outcome of a successfully dispatched message
#[derive(Debug)]
pub enum McpReply {
    /// A JSON-RPC response to send back
    Response(JsonRpcResponse),

    /// A notification was accepted; nothing to send
    Accepted,
}

/// MCP Server over a tool registry
#[derive(Debug, Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    server_info: ServerInfo,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            server_info: ServerInfo {
                name: app::SERVER_NAME.to_string(),
                version: app::VERSION.to_string(),
            },
        }
    }

    /// Parse and dispatch a raw request body
    pub fn handle_body(&self, body: &[u8]) -> Result<McpReply> {
        let value: Value = serde_json::from_slice(body).map_err(|e| McpError::InvalidRequest {
            message: e.to_string(),
        })?;

        if !value.is_object() {
            return Err(McpError::InvalidRequest {
                message: "expected a JSON-RPC request object".to_string(),
            }
            .into());
        }

        let request: JsonRpcRequest =
            serde_json::from_value(value).map_err(|e| McpError::InvalidRequest {
                message: e.to_string(),
            })?;

        self.handle_request(request)
    }

    /// Handle an incoming JSON-RPC request
    pub fn handle_request(&self, request: JsonRpcRequest) -> Result<McpReply> {
        tracing::debug!(method = %request.method, id = ?request.id, "dispatching MCP request");

        let response = match request.method.as_str() {
            methods::INITIALIZE => JsonRpcResponse::success(request.id, self.handle_initialize()?),
            methods::INITIALIZED => return Ok(McpReply::Accepted),
            methods::PING => JsonRpcResponse::success(request.id, serde_json::json!({})),
            methods::LIST_TOOLS => JsonRpcResponse::success(request.id, self.handle_list_tools()?),
            methods::CALL_TOOL => match self.handle_call_tool(request.params.as_ref())? {
                Ok(result) => JsonRpcResponse::success(request.id, result),
                Err(error) => JsonRpcResponse::error(request.id, error),
            },
            _ => {
                return Err(McpError::UnknownMethod {
                    method: request.method.clone(),
                }
                .into())
            }
        };

        Ok(McpReply::Response(response))
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Result<Value> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
            server_info: self.server_info.clone(),
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle list tools request
    fn handle_list_tools(&self) -> Result<Value> {
        let result = ListToolsResult {
            tools: self.registry.descriptors().map(Tool::from).collect(),
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle call tool request
    ///
    /// Caller mistakes come back as a JSON-RPC error; handler failures
    /// propagate as `Err`.
    fn handle_call_tool(
        &self,
        params: Option<&Value>,
    ) -> Result<std::result::Result<Value, JsonRpcError>> {
        let params: CallToolParams = match params {
            Some(p) => match serde_json::from_value(p.clone()) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(Err(JsonRpcError::invalid_params(format!(
                        "Invalid tool parameters: {}",
                        e
                    ))))
                }
            },
            None => return Ok(Err(JsonRpcError::invalid_params("Missing tool parameters"))),
        };

        let tool = match self.registry.lookup(&params.name) {
            Ok(tool) => tool,
            Err(ToolError::UnknownTool { name }) => {
                tracing::warn!(tool = %name, "call for unknown tool");
                return Ok(Err(JsonRpcError::unknown_tool(&name)));
            }
            Err(e) => return Err(e.into()),
        };

        let output = tool.call(&params.arguments)?;
        Ok(Ok(serde_json::to_value(CallToolResult::text(output.summary))?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::clock::SystemClock;
    use crate::error::TimeAppError;
    use crate::tools::{empty_input_schema, Tool as ToolHandler, ToolDescriptor, ToolOutput};

    fn server() -> McpServer {
        McpServer::new(Arc::new(ToolRegistry::standard(Arc::new(SystemClock::default()))))
    }

    fn request(body: Value) -> Result<McpReply> {
        server().handle_body(body.to_string().as_bytes())
    }

    fn response(body: Value) -> JsonRpcResponse {
        match request(body).unwrap() {
            McpReply::Response(response) => response,
            McpReply::Accepted => panic!("expected a response"),
        }
    }

    #[test]
    fn test_server_info() {
        assert_eq!(app::SERVER_NAME, "time-app");
    }

    #[test]
    fn test_initialize() {
        let resp = response(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"}));
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], MCP_VERSION);
        assert_eq!(result["capabilities"]["tools"], json!({}));
        assert_eq!(result["serverInfo"]["name"], "time-app");
        assert_eq!(resp.id, Some(RequestId::Number(1)));
    }

    #[test]
    fn test_list_tools() {
        let resp = response(json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"}));
        let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "get_current_time");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[test]
    fn test_call_tool() {
        let resp = response(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "get_current_time", "arguments": {}}
        }));
        let result = resp.result.unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("The current time is: "));
        assert!(text.contains("\n\nTimestamp: "));
    }

    #[test]
    fn test_call_unknown_tool_is_structured_error() {
        let resp = response(json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "nonexistent_tool"}
        }));
        assert!(resp.result.is_none());
        let error = resp.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("nonexistent_tool"));
        assert_eq!(error.data.unwrap()["tool"], "nonexistent_tool");
    }

    #[test]
    fn test_call_without_params() {
        let resp = response(json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call"}));
        assert_eq!(resp.error.unwrap().code, -32602);
    }

    #[test]
    fn test_unknown_method() {
        let err = request(json!({"method": "unsupported_method"})).unwrap_err();
        assert!(matches!(
            err,
            TimeAppError::Mcp(McpError::UnknownMethod { ref method }) if method == "unsupported_method"
        ));
    }

    #[test]
    fn test_missing_method_is_unknown() {
        let err = request(json!({"id": 1})).unwrap_err();
        assert!(matches!(err, TimeAppError::Mcp(McpError::UnknownMethod { .. })));
    }

    #[test]
    fn test_initialized_notification_accepted() {
        let reply = request(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})).unwrap();
        assert!(matches!(reply, McpReply::Accepted));
    }

    #[test]
    fn test_ping() {
        let resp = response(json!({"jsonrpc": "2.0", "id": 9, "method": "ping"}));
        assert_eq!(resp.result.unwrap(), json!({}));
    }

    #[test]
    fn test_malformed_body() {
        let err = server().handle_body(b"{not json").unwrap_err();
        assert!(matches!(err, TimeAppError::Mcp(McpError::InvalidRequest { .. })));

        let err = request(json!([1, 2])).unwrap_err();
        assert!(matches!(err, TimeAppError::Mcp(McpError::InvalidRequest { .. })));
    }

    struct BrokenTool(ToolDescriptor);

    impl ToolHandler for BrokenTool {
        fn descriptor(&self) -> &ToolDescriptor {
            &self.0
        }

        fn call(&self, _arguments: &Value) -> std::result::Result<ToolOutput, ToolError> {
            Err(ToolError::HandlerFailure {
                message: "clock unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_handler_failure_propagates() {
        let registry = ToolRegistry::builder()
            .register(Arc::new(BrokenTool(ToolDescriptor::new(
                "broken",
                "always fails",
                empty_input_schema(),
            ))))
            .unwrap()
            .build();
        let server = McpServer::new(Arc::new(registry));
        let body = json!({"id": 1, "method": "tools/call", "params": {"name": "broken"}});

        let err = server.handle_body(body.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, TimeAppError::Tool(ToolError::HandlerFailure { .. })));
    }
}
