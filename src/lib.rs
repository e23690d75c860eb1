//! Time App Server Library
//!
//! Exposes a `get_current_time` tool through three discovery schemes: a
//! plugin manifest with an OpenAPI description, a plain REST endpoint, and an
//! MCP (Model Context Protocol) endpoint.

pub mod clock;
pub mod config;
pub mod error;
pub mod legacy;
pub mod mcp;
pub mod origin;
pub mod server;
pub mod tools;

pub use config::Config;
pub use error::{Result, TimeAppError};
