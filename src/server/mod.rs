//! HTTP transport
//!
//! Builds the axum router that dispatches each path to its protocol adapter
//! and runs it on a TCP listener.

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::clock::SystemClock;
use crate::config::{app, Config};
use crate::error::Result;
use crate::legacy::{MANIFEST_PATH, OPENAPI_PATH, TIME_PATH};
use crate::mcp::McpServer;
use crate::tools::ToolRegistry;

/// Path of the health check
pub const HEALTH_PATH: &str = "/health";

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ToolRegistry>,
    pub mcp: McpServer,
}

impl AppState {
    /// State over an explicit registry
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        let registry = Arc::new(registry);
        Self {
            config: Arc::new(config),
            mcp: McpServer::new(registry.clone()),
            registry,
        }
    }

    /// State with the standard tools reading the system clock
    pub fn from_config(config: Config) -> Self {
        let clock = Arc::new(SystemClock::new(config.time_zone));
        let registry = ToolRegistry::standard(clock);
        Self::new(config, registry)
    }
}

fn mcp_route() -> MethodRouter<AppState> {
    post(handlers::mcp).fallback(handlers::method_not_allowed)
}

/// Create the router
pub fn router(state: AppState) -> Router {
    let timeout = state.config.request_timeout;

    Router::new()
        .route("/", get(handlers::homepage).fallback(handlers::method_not_allowed))
        .route(MANIFEST_PATH, get(handlers::manifest).fallback(handlers::method_not_allowed))
        .route(OPENAPI_PATH, get(handlers::openapi).fallback(handlers::method_not_allowed))
        .route(TIME_PATH, get(handlers::current_time).fallback(handlers::method_not_allowed))
        .route(app::MCP_PATH, mcp_route())
        .route("/mcp/", mcp_route())
        .route(HEALTH_PATH, get(handlers::health).fallback(handlers::method_not_allowed))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TimeoutLayer::new(timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until shutdown
pub async fn serve(config: Config) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve_listener(listener, AppState::from_config(config)).await
}

/// Serve on an already bound listener until shutdown
pub async fn serve_listener(listener: TcpListener, state: AppState) -> Result<()> {
    let port = listener.local_addr()?.port();

    tracing::info!("Current Time App is running on port {}", port);
    tracing::info!("Homepage: http://localhost:{}", port);
    tracing::info!("Manifest: http://localhost:{}{}", port, MANIFEST_PATH);
    tracing::info!("OpenAPI: http://localhost:{}{}", port, OPENAPI_PATH);
    tracing::info!("Time endpoint: http://localhost:{}{}", port, TIME_PATH);
    tracing::info!("MCP endpoint: http://localhost:{}{}", port, app::MCP_PATH);
    tracing::info!("Health check: http://localhost:{}{}", port, HEALTH_PATH);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
