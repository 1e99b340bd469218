//! Daily recommendation endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{error_response, ApiResponse};
use crate::api::state::AppState;
use crate::utils::time::date_or_today;

#[derive(Debug, Deserialize)]
pub struct DailyParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
}

/// GET /api/recommend/daily - Seasonal, exam and contrast picks for a day
pub async fn daily(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DailyParams>,
) -> Response {
    match date_or_today(params.date.as_deref()) {
        Ok(date) => Json(ApiResponse::list(state.store.daily_recommend(date))).into_response(),
        Err(e) => error_response(e),
    }
}
