//! OpenAPI description of the REST endpoint

use schemars::schema_for;
use serde_json::{json, Value};

use crate::clock::TimeSnapshot;
use crate::config::app;
use crate::error::Result;
use crate::origin::RequestOrigin;

/// OpenAPI version of the generated document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// OpenAPI document describing `GET /time`, served from `origin`
pub fn openapi_document(origin: &RequestOrigin) -> Result<Value> {
    let response_schema = serde_json::to_value(schema_for!(TimeSnapshot).schema)?;

    Ok(json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": app::NAME_FOR_HUMAN,
            "version": app::VERSION,
            "description": "A simple app that returns the current time"
        },
        "servers": [
            { "url": origin.base_url() }
        ],
        "paths": {
            "/time": {
                "get": {
                    "operationId": "getCurrentTime",
                    "summary": "Get the current date and time",
                    "description": "Returns the current date and time in a formatted string",
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": {
                                "application/json": {
                                    "schema": response_schema
                                }
                            }
                        }
                    }
                }
            }
        }
    }))
}
