//! Server Implementation
//!
//! Router assembly and HTTP server startup.

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::core::{AppState, Config};
use crate::utils::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        // Auth API - login public, me/logout on the session
        .merge(crate::api::auth::router())
        // Orders API - admin session enforced per handler
        .merge(crate::api::orders::router())
        // Health API - public route
        .merge(crate::api::health::router())
        // Admin console pages - guarded by the page middleware
        .merge(crate::pages::router(state))
}

/// Build a fully configured application with middleware and state
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(state: &AppState) -> Router {
    build_router(state)
        .with_state(state.clone())
        // ========== Tower HTTP Middleware ==========
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request/response logging
        .layer(TraceLayer::new_for_http())
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<AppState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests, embedding)
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => AppState::initialize(&self.config)?,
        };

        let app = build_app(&state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!(
            environment = %state.config.environment,
            "DigiShop admin server listening on {}",
            addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
