use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Join-token minting for the browser client
        .route("/api/token", get(handlers::issue_token))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        // The web client is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
