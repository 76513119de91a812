//! Folder provisioning handlers.

use axum::Json;
use axum::extract::{Path, State};

use malaf_entity::provision::BatchReport;
use malaf_entity::student::Student;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/teachers/{id}/students/folders
///
/// Provisions Drive folder trees for every student of the teacher whose
/// folder has not been created yet. Always returns a full report; a
/// per-student failure never fails the request.
pub async fn provision_folders(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<ApiResponse<BatchReport>>, ApiError> {
    let report = state.provision_service.provision_all(teacher_id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// POST /api/students/{id}/folder
pub async fn provision_single(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    let student = state.provision_service.provision_single(student_id).await?;
    Ok(Json(ApiResponse::ok(student)))
}
