//! Teacher profile handlers.

use axum::Json;
use axum::extract::{Path, State};

use malaf_entity::teacher::Teacher;
use malaf_service::teacher::TeacherStats;

use crate::dto::request::{SetDriveFolderRequest, UpdateTeacherRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/teachers/{id}
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Teacher>>, ApiError> {
    let teacher = state.teacher_service.get(id).await?;
    Ok(Json(ApiResponse::ok(teacher)))
}

/// PUT /api/teachers/{id}
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTeacherRequest>,
) -> Result<Json<ApiResponse<Teacher>>, ApiError> {
    let teacher = state
        .teacher_service
        .update_profile(id, body.school_name, body.subjects)
        .await?;
    Ok(Json(ApiResponse::ok(teacher)))
}

/// PUT /api/teachers/{id}/drive-folder
pub async fn set_drive_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SetDriveFolderRequest>,
) -> Result<Json<ApiResponse<Teacher>>, ApiError> {
    let teacher = state.teacher_service.set_drive_folder(id, &body.folder).await?;
    Ok(Json(ApiResponse::ok(teacher)))
}

/// POST /api/teachers/{id}/link-code
pub async fn regenerate_link_code(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Teacher>>, ApiError> {
    let teacher = state.teacher_service.regenerate_link_code(id).await?;
    Ok(Json(ApiResponse::ok(teacher)))
}

/// GET /api/teachers/{id}/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TeacherStats>>, ApiError> {
    let stats = state.teacher_service.stats(id).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
