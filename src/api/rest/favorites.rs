//! Favorite endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error_response, ApiResponse};
use crate::api::state::AppState;

/// GET /api/favorites - Favorite herbs, newest first
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::list(state.store.get_favorites()))
}

/// PUT /api/favorites/:id
pub async fn add_favorite(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.store.add_favorite(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/favorites/:id
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.remove_favorite(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
