//! Subject catalog handlers.

use axum::Json;
use axum::extract::State;

use malaf_entity::subject::Subject;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Subject>>>, ApiError> {
    let subjects = state.subject_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(subjects)))
}
