//! File upload and listing handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};

use malaf_core::error::AppError;
use malaf_entity::file::StudentFile;
use malaf_service::file::UploadRequest;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/teachers/{id}/students/{sid}/files
///
/// Multipart form: a `file` part plus `subject`, `category`, and
/// optional `description` text parts.
pub async fn upload_file(
    State(state): State<AppState>,
    Path((teacher_id, student_id)): Path<(i64, i64)>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<StudentFile>>, ApiError> {
    let mut file_name = None;
    let mut mime_type = None;
    let mut data = None;
    let mut subject_name = None;
    let mut category = None;
    let mut description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file_name = field.file_name().map(str::to_string);
                mime_type = field.content_type().map(str::to_string);
                data = Some(field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read file part: {e}"))
                })?);
            }
            "subject" => subject_name = Some(read_text(field).await?),
            "category" => category = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            _ => {}
        }
    }

    let request = UploadRequest {
        file_name: file_name.ok_or_else(|| AppError::validation("A file part is required"))?,
        mime_type: mime_type.unwrap_or_else(|| "application/octet-stream".to_string()),
        data: data.ok_or_else(|| AppError::validation("A file part is required"))?,
        subject_name: subject_name
            .ok_or_else(|| AppError::validation("Subject is required"))?,
        category: category.ok_or_else(|| AppError::validation("Category is required"))?,
        description: description.filter(|d| !d.trim().is_empty()),
    };

    let record = state
        .file_service
        .upload(teacher_id, student_id, request)
        .await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// GET /api/teachers/{id}/students/{sid}/files
pub async fn list_files(
    State(state): State<AppState>,
    Path((teacher_id, student_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<Vec<StudentFile>>>, ApiError> {
    let files = state.file_service.list(teacher_id, student_id).await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// DELETE /api/teachers/{id}/files/{fid}
pub async fn delete_file(
    State(state): State<AppState>,
    Path((teacher_id, file_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.file_service.remove(teacher_id, file_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "File deleted".to_string(),
    })))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart field: {e}")).into())
}
