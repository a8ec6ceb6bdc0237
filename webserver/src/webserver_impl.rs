//! Main webserver implementation
//!
//! Builds the axum router over `AppState` and serves it until the shutdown
//! future resolves.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use shared::{ProcessId, process_info};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{health, performers, users};

/// Router with every API route
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Performer routes; static segments win over `:id`
        .route(
            "/api/performers",
            get(performers::list_performers).post(performers::create_performer),
        )
        .route("/api/performers/top", get(performers::top_performers))
        .route("/api/performers/perform", post(performers::perform_all))
        .route("/api/performers/:id", get(performers::get_performer))
        .route("/api/performers/:id/history", get(performers::performer_history))
        .route("/api/performers/:id/perform", post(performers::perform_one))

        // User routes
        .route("/api/users", post(users::register_user))

        // Health check
        .route("/health", get(health::health_check))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state)
}

pub struct WebServer {
    bind_address: SocketAddr,
    state: AppState,
}

impl WebServer {
    pub fn new(bind_address: SocketAddr, state: AppState) -> Self {
        Self { bind_address, state }
    }

    pub fn build_router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run<F>(self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = TcpListener::bind(self.bind_address).await.map_err(|e| {
            WebServerError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e))
        })?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", self.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
