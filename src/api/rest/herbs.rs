//! Herb and category endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::Herb;

/// Query parameters for listing herbs
#[derive(Debug, Deserialize)]
pub struct ListHerbsParams {
    /// Filter by category name
    pub category: Option<String>,
}

/// GET /api/herbs - List herbs in catalog order
pub async fn list_herbs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListHerbsParams>,
) -> impl IntoResponse {
    let herbs = match params.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => state.store.get_herbs_by_category(category),
        None => state.store.get_all_herbs(),
    };
    Json(ApiResponse::list(herbs))
}

/// Herb with the user's favorite flag
#[derive(Debug, Serialize)]
pub struct HerbDetail {
    #[serde(flatten)]
    pub herb: Herb,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// GET /api/herbs/:id - Get single herb
pub async fn get_herb(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get_herb_by_id(&id) {
        Some(herb) => {
            let detail = HerbDetail {
                is_favorite: state.store.is_favorite(&id),
                herb,
            };
            (StatusCode::OK, Json(ApiResponse::new(detail))).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("Herb '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// GET /api/categories - Browse categories with herb counts
pub async fn list_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::list(state.store.categories()))
}

/// GET /api/categories/:id/herbs - Herbs in a browse category
pub async fn category_herbs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    Json(ApiResponse::list(state.store.get_herbs_by_category_id(&id)))
}
