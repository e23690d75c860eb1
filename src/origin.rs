//! Scheme and host of the inbound request
//!
//! Discovery documents point back at this server, so URLs are built from what
//! the caller actually connected to rather than from a fixed host.

use axum::http::header::HOST;
use axum::http::HeaderMap;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Origin (`scheme://host`) of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    /// Resolve the origin from request headers
    ///
    /// Proxy headers win over `Host`; `fallback_host` is used when neither is present.
    pub fn from_headers(headers: &HeaderMap, fallback_host: &str) -> Self {
        let scheme = first_value(headers, FORWARDED_PROTO)
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_else(|| "http".to_string());

        let host = first_value(headers, FORWARDED_HOST)
            .or_else(|| first_value(headers, HOST.as_str()))
            .unwrap_or_else(|| fallback_host.to_string());

        Self { scheme, host }
    }

    /// `scheme://host`
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Absolute URL of `path` on this origin
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
