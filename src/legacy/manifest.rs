//! Plugin manifest document

use serde::{Deserialize, Serialize};

use crate::config::app;
use crate::legacy::OPENAPI_PATH;
use crate::origin::RequestOrigin;

/// Manifest schema version
pub const SCHEMA_VERSION: &str = "v1";

/// `/.well-known/ai-plugin.json` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub schema_version: String,
    pub name_for_human: String,
    pub name_for_model: String,
    pub description_for_human: String,
    pub description_for_model: String,
    pub api: ApiReference,
    pub auth: AuthSpec,
}

/// Where the API description lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiReference {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Authentication scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSpec {
    #[serde(rename = "type")]
    pub kind: String,
}

impl PluginManifest {
    /// Manifest pointing at the OpenAPI document on `origin`
    pub fn for_origin(origin: &RequestOrigin) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            name_for_human: app::NAME_FOR_HUMAN.to_string(),
            name_for_model: app::NAME_FOR_MODEL.to_string(),
            description_for_human: app::DESCRIPTION_FOR_HUMAN.to_string(),
            description_for_model: app::DESCRIPTION_FOR_MODEL.to_string(),
            api: ApiReference {
                kind: "openapi".to_string(),
                url: origin.url(OPENAPI_PATH),
            },
            auth: AuthSpec {
                kind: "none".to_string(),
            },
        }
    }
}
