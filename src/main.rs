//! Time App Server
//!
//! Serves the current date and time to AI agents over a plugin manifest,
//! a REST endpoint and an MCP endpoint.

use clap::Parser;

use time_app_server::config::{parse_time_zone, Config};
use time_app_server::error::Result;
use time_app_server::server;

/// Time App Server
#[derive(Parser)]
#[command(name = "time-app-server")]
#[command(author, version, about = "Time App Server - current date and time for AI agents")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind to (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// IANA zone for the human-readable time (overrides TIME_ZONE)
    #[arg(long)]
    time_zone: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(zone) = cli.time_zone {
        config.time_zone = parse_time_zone(&zone)?;
    }

    tracing::info!(
        addr = %config.bind_addr(),
        time_zone = %config.time_zone,
        "Starting Time App Server"
    );

    server::serve(config).await
}
