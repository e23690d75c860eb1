//! Legacy plugin discovery
//!
//! Serves the `ai-plugin.json` manifest and the OpenAPI document that
//! describes the REST `/time` endpoint.

pub mod manifest;
pub mod openapi;

pub use manifest::{ApiReference, AuthSpec, PluginManifest};
pub use openapi::openapi_document;

/// Path of the plugin manifest
pub const MANIFEST_PATH: &str = "/.well-known/ai-plugin.json";

/// Path of the OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path of the REST time endpoint
pub const TIME_PATH: &str = "/time";
