//! REST API module for HTTP endpoints
//!
//! - `GET /api/herbs` - List herbs, optionally by category
//! - `GET /api/herbs/:id` - Get single herb
//! - `GET /api/categories` - Browse categories with counts
//! - `GET /api/categories/:id/herbs` - Herbs in a browse category
//! - `GET /api/search` - Ranked search
//! - `GET /api/recommend/daily` - Daily picks
//! - `/api/favorites`, `/api/history` - User state

pub mod favorites;
pub mod herbs;
pub mod history;
pub mod recommend;
pub mod search;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::HerbError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Wrap a list, reporting its length as the total
    pub fn list(data: Vec<T>) -> Self {
        let total = data.len();
        Self::with_total(data, total)
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a store error onto a status code and error body
pub fn error_response(err: HerbError) -> Response {
    let (status, body) = match &err {
        HerbError::HerbNotFound(_) => (StatusCode::NOT_FOUND, ApiError::not_found(err.to_string())),
        HerbError::InvalidDate(_) | HerbError::InvalidHerb(_) => {
            (StatusCode::BAD_REQUEST, ApiError::bad_request(err.to_string()))
        }
        _ => {
            tracing::error!(error = %err, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal(err.to_string()),
            )
        }
    };
    (status, Json(body)).into_response()
}
