//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{favorites, herbs, history, recommend, search};
use super::state::AppState;
use crate::error::HerbResult;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the mobile/web client may live on any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/herbs", get(herbs::list_herbs))
        .route("/api/herbs/:id", get(herbs::get_herb))
        .route("/api/categories", get(herbs::list_categories))
        .route("/api/categories/:id/herbs", get(herbs::category_herbs))
        .route("/api/search", get(search::search_herbs))
        .route("/api/recommend/daily", get(recommend::daily))
        .route("/api/favorites", get(favorites::list_favorites))
        .route(
            "/api/favorites/:id",
            put(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route(
            "/api/history",
            get(history::recent_searches).delete(history::clear_history),
        )
        .route("/api/history/:query", delete(history::delete_search))
        .layer(cors)
        .with_state(state)
}

/// Serve the API until Ctrl+C
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> HerbResult<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "HTTP API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
