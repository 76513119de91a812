//! Student roster handlers.

use axum::Json;
use axum::extract::{Path, State};

use malaf_entity::student::{CreateStudent, Student, UpdateStudent};
use malaf_entity::subject::Subject;

use crate::dto::request::{CreateStudentRequest, UpdateStudentRequest};
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/teachers/{id}/students
pub async fn list_students(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Student>>>, ApiError> {
    let students = state.student_service.list(teacher_id).await?;
    Ok(Json(ApiResponse::ok(students)))
}

/// POST /api/teachers/{id}/students
pub async fn create_student(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    let data = CreateStudent {
        civil_id: body.civil_id,
        student_name: body.student_name,
        grade: body.grade,
        class_number: body.class_number,
        academic_year: body
            .academic_year
            .unwrap_or_else(CreateStudent::default_academic_year),
        teacher_id,
    };
    let student = state.student_service.create(&data, &body.subjects).await?;
    Ok(Json(ApiResponse::ok(student)))
}

/// PUT /api/students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    let data = UpdateStudent {
        student_name: body.student_name,
        grade: body.grade,
        class_number: body.class_number,
        academic_year: body.academic_year,
    };
    let student = state
        .student_service
        .update(id, &data, body.subjects.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(student)))
}

/// GET /api/students/{id}/subjects
pub async fn get_student_subjects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Subject>>>, ApiError> {
    let subjects = state.student_service.subjects(id).await?;
    Ok(Json(ApiResponse::ok(subjects)))
}

/// DELETE /api/teachers/{id}/students/{sid}
pub async fn delete_student(
    State(state): State<AppState>,
    Path((teacher_id, student_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.student_service.remove(teacher_id, student_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Student deleted".to_string(),
    })))
}

/// DELETE /api/teachers/{id}/students
pub async fn delete_all_students(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.student_service.remove_all(teacher_id).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}
