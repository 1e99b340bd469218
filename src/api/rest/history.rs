//! Search history endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error_response, ApiResponse};
use crate::api::state::AppState;

/// GET /api/history - Recent queries, newest first
pub async fn recent_searches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::list(state.store.recent_searches()))
}

/// DELETE /api/history
pub async fn clear_history(State(state): State<Arc<AppState>>) -> Response {
    match state.store.clear_history() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/history/:query
pub async fn delete_search(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Response {
    match state.store.delete_search(&query) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
