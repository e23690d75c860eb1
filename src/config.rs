//! Configuration management for the Time App Server
//!
//! Handles environment variables and configuration loading.

use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{ConfigError, Result};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Time App Server
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Zone used for the human-readable time
    pub time_zone: Tz,

    /// Upper bound on the time spent serving a single request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host;
        }

        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            config.port = parse_port(&port)?;
        }

        if let Some(zone) = lookup("TIME_ZONE").filter(|z| !z.trim().is_empty()) {
            config.time_zone = parse_time_zone(&zone)?;
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS").filter(|s| !s.trim().is_empty()) {
            config.request_timeout = parse_timeout(&secs)?;
        }

        Ok(config)
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Host used in generated URLs when the request carries none
    pub fn fallback_authority(&self) -> String {
        format!("localhost:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            time_zone: Tz::UTC,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Parse a port number
pub fn parse_port(value: &str) -> Result<u16> {
    value.trim().parse::<u16>().map_err(|_| {
        ConfigError::InvalidPort {
            value: value.to_string(),
        }
        .into()
    })
}

/// Parse an IANA time zone name
pub fn parse_time_zone(value: &str) -> Result<Tz> {
    value.trim().parse::<Tz>().map_err(|_| {
        ConfigError::UnknownTimeZone {
            name: value.to_string(),
        }
        .into()
    })
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: value.to_string(),
        }
        .into()),
    }
}

/// Application identity advertised by the discovery documents
pub mod app {
    /// Name shown to people
    pub const NAME_FOR_HUMAN: &str = "Current Time App";

    /// Name used by the model
    pub const NAME_FOR_MODEL: &str = "time_app";

    /// Description shown to people
    pub const DESCRIPTION_FOR_HUMAN: &str = "Get the current date and time";

    /// Guidance for the model on when to use the app
    pub const DESCRIPTION_FOR_MODEL: &str = "Use this app when the user asks for the current time, date, or what time it is. This app provides the current date and time in a human-readable format.";

    /// MCP server name
    pub const SERVER_NAME: &str = "time-app";

    /// Version reported by the MCP handshake and the OpenAPI document
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Path of the MCP endpoint
    pub const MCP_PATH: &str = "/mcp";
}
