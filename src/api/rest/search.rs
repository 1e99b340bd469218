//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{error_response, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    #[serde(default)]
    pub q: String,
    /// Maximum number of results (0 = no limit)
    #[serde(default)]
    pub limit: usize,
    /// Add the query to the search history
    #[serde(default)]
    pub record: bool,
}

/// GET /api/search - Ranked herb search
///
/// A blank query returns an empty list rather than an error.
pub async fn search_herbs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mut results = state.store.search(&params.q);
    let total = results.len();
    if params.limit > 0 {
        results.truncate(params.limit);
    }

    if params.record {
        if let Err(e) = state.store.add_search(&params.q) {
            return error_response(e);
        }
    }

    Json(ApiResponse::with_total(results, total)).into_response()
}
