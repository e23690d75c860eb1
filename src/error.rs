//! Error types for the Time App Server
//!
//! This module defines the error hierarchy for all operations in the server
//! and how each failure is presented to HTTP callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the Time App Server
#[derive(Error, Debug)]
pub enum TimeAppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tool registry and invocation errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port: {value}")]
    InvalidPort { value: String },

    #[error("Unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    #[error("Invalid request timeout: {value}")]
    InvalidTimeout { value: String },
}

/// Tool registry and invocation errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Tool already registered: {name}")]
    DuplicateTool { name: String },

    #[error("Tool handler failed: {message}")]
    HandlerFailure { message: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown method: {method}")]
    UnknownMethod { method: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

/// Result type alias for Time App operations
pub type Result<T> = std::result::Result<T, TimeAppError>;

impl TimeAppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            TimeAppError::Mcp(McpError::UnknownMethod { .. }) => StatusCode::NOT_FOUND,
            TimeAppError::Mcp(McpError::InvalidRequest { .. }) => StatusCode::BAD_REQUEST,
            TimeAppError::Tool(ToolError::UnknownTool { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body
    pub fn public_message(&self) -> String {
        match self {
            // Callers match on this exact text.
            TimeAppError::Mcp(McpError::UnknownMethod { .. }) => "Method not found".to_string(),
            TimeAppError::Mcp(e) => e.to_string(),
            TimeAppError::Tool(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for TimeAppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolError::UnknownTool {
            name: "nonexistent_tool".to_string(),
        };
        assert!(err.to_string().contains("nonexistent_tool"));
    }

    #[test]
    fn test_error_conversion() {
        let mcp_err = McpError::UnknownMethod {
            method: "unsupported_method".to_string(),
        };
        let err: TimeAppError = mcp_err.into();
        assert!(matches!(err, TimeAppError::Mcp(_)));
    }

    #[test]
    fn test_unknown_method_maps_to_404() {
        let err = TimeAppError::from(McpError::UnknownMethod {
            method: "nope".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Method not found");
    }

    #[test]
    fn test_handler_failure_maps_to_500_with_message() {
        let err = TimeAppError::from(ToolError::HandlerFailure {
            message: "clock exploded".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.public_message().contains("clock exploded"));
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let err = TimeAppError::from(McpError::InvalidRequest {
            message: "expected value".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
