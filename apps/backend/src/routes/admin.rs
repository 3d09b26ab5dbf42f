//! Operational endpoints

use axum::{extract::State, Json};

use crate::models::ErrorLogResponse;
use crate::AppState;

/// GET /api/admin/errors
pub async fn errors(State(state): State<AppState>) -> Json<ErrorLogResponse> {
    Json(ErrorLogResponse {
        errors: state.errors.recent(),
    })
}
