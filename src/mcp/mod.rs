//! MCP (Model Context Protocol) module
//!
//! Implements the MCP server protocol for tool discovery and invocation.

pub mod server;
pub mod types;

pub use server::{McpReply, McpServer};
