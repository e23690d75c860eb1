//! Route handlers

use std::any::Any;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::config::app;
use crate::error::{Result, ToolError};
use crate::legacy::{openapi_document, PluginManifest};
use crate::mcp::McpReply;
use crate::origin::RequestOrigin;
use crate::server::{AppState, HEALTH_PATH};
use crate::tools::CURRENT_TIME_TOOL;

fn origin(state: &AppState, headers: &HeaderMap) -> RequestOrigin {
    RequestOrigin::from_headers(headers, &state.config.fallback_authority())
}

/// Run a tool invocation on the blocking pool so the request timeout can fire
/// while it runs. A panic inside `f` is re-raised on the handler task.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(ToolError::HandlerFailure {
            message: format!("Task join error: {}", e),
        }
        .into()),
    }
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Current Time App is running",
        "mcp_endpoint": app::MCP_PATH,
    }))
}

/// `GET /.well-known/ai-plugin.json`
pub async fn manifest(State(state): State<AppState>, headers: HeaderMap) -> Json<PluginManifest> {
    Json(PluginManifest::for_origin(&origin(&state, &headers)))
}

/// `GET /openapi.json`
pub async fn openapi(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    Ok(Json(openapi_document(&origin(&state, &headers))?))
}

/// `GET /time`
pub async fn current_time(State(state): State<AppState>) -> Result<Json<Value>> {
    let tool = state.registry.lookup(CURRENT_TIME_TOOL)?.clone();
    let output = run_blocking(move || Ok(tool.call(&Value::Null)?)).await?;
    Ok(Json(output.structured))
}

/// `POST /mcp`
pub async fn mcp(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let server = state.mcp.clone();
    match run_blocking(move || server.handle_body(&body)).await? {
        McpReply::Response(response) => Ok(Json(response).into_response()),
        McpReply::Accepted => Ok(StatusCode::ACCEPTED.into_response()),
    }
}

/// `GET /`
pub async fn homepage(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let mcp_url = origin(&state, &headers).url(app::MCP_PATH);

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{name}</title>
  <style>
    body {{ font-family: system-ui; max-width: 800px; margin: 50px auto; padding: 20px; line-height: 1.6; }}
    code {{ background: #f4f4f4; padding: 2px 6px; border-radius: 3px; }}
  </style>
</head>
<body>
  <h1>{name}</h1>
  <p>Provides a <code>{tool}</code> tool that returns the current date and time.</p>
  <h2>Endpoints</h2>
  <ul>
    <li><strong>POST</strong> <code>{mcp_path}</code> - MCP endpoint for tool discovery and execution</li>
    <li><strong>GET</strong> <code>/.well-known/ai-plugin.json</code> - plugin manifest</li>
    <li><strong>GET</strong> <code>/openapi.json</code> - OpenAPI description</li>
    <li><strong>GET</strong> <code>/time</code> - current time</li>
    <li><strong>GET</strong> <code>{health}</code> - health check</li>
  </ul>
  <h2>Connecting</h2>
  <p>Register this MCP endpoint URL with your client: <code>{mcp_url}</code></p>
</body>
</html>
"#,
        name = app::NAME_FOR_HUMAN,
        tool = CURRENT_TIME_TOOL,
        mcp_path = app::MCP_PATH,
        health = HEALTH_PATH,
        mcp_url = mcp_url,
    ))
}

/// Anything without a route
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// A known path hit with the wrong method
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

/// Converts a handler panic into a JSON 500
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    tracing::error!(panic = %message, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
