//! Fitlog REST API
//!
//! HTTP API layer for fitlog, built with Axum.
//!
//! # Endpoints
//!
//! ## Users
//! - `POST /api/users` - Create a user
//! - `GET /api/users` - List all users
//!
//! ## Exercises
//! - `POST /api/users/:id/exercises` - Add an exercise to a user's log
//! - `GET /api/users/:id/logs` - Query a user's log with optional
//!   `from`, `to` and `limit` filters
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Landing
//! - `GET /` - Static landing page
//!
//! # Example
//!
//! ```rust,ignore
//! use fitlog::api::{serve, AppState};
//! use fitlog::config::ApiConfig;
//! use fitlog::store::DocumentStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let docs = Arc::new(DocumentStore::open("fitlog.db".as_ref())?);
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Arc::clone(&docs), config.clone());
//!     serve(state, &config).await?;
//!     docs.close().await;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/users",
            post(routes::users::create_user).get(routes::users::list_users),
        )
        .route("/users/:id/exercises", post(routes::exercises::add_exercise))
        .route("/users/:id/logs", get(routes::logs::get_logs));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::landing::landing))
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Fitlog API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Fitlog API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
