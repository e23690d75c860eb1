//! Tool definitions and the registry that serves them
//!
//! A tool is a named, schema-described capability. Every protocol adapter
//! reaches tools through the [`ToolRegistry`], so the same handler backs the
//! REST endpoint and the MCP `tools/call` method.

pub mod current_time;
pub mod registry;

use serde_json::Value;

use crate::error::ToolError;

pub use current_time::{CurrentTimeTool, CURRENT_TIME_TOOL};
pub use registry::{ToolRegistry, ToolRegistryBuilder};

/// Static metadata describing a tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Unique tool identifier
    pub name: String,

    /// Guidance for the calling agent
    pub description: String,

    /// JSON Schema of the accepted arguments
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Result of invoking a tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Sentence presented to conversational callers
    pub summary: String,

    /// Machine-readable result
    pub structured: Value,
}

/// A callable tool
pub trait Tool: Send + Sync {
    fn descriptor(&self) -> &ToolDescriptor;

    fn call(&self, arguments: &Value) -> Result<ToolOutput, ToolError>;
}

/// Schema for tools that take no arguments
pub fn empty_input_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}
