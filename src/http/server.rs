//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the proxy and health handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Build the shared outbound client once at startup
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::http::proxy::proxy_image;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::upstream;

/// Application state injected into handlers.
///
/// The only process-wide pieces: the pooled outbound client and the
/// development flag read once at startup.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub development: bool,
}

/// HTTP server for the image proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the outbound client cannot be constructed.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let state = AppState {
            client: upstream::build_client()?,
            development: config.development,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/api", any(proxy_image))
            .route("/health", get(health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Liveness probe.
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
