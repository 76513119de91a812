//! Parent access handlers.

use axum::Json;
use axum::extract::State;

use malaf_entity::captcha::CaptchaQuestion;
use malaf_service::parent::{ParentView, VerifyRequest};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/captcha
///
/// The entity withholds the answer field from serialization.
pub async fn get_captcha(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CaptchaQuestion>>, ApiError> {
    let question = state.parent_service.random_captcha().await?;
    Ok(Json(ApiResponse::ok(question)))
}

/// POST /api/parent/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<ApiResponse<ParentView>>, ApiError> {
    let view = state.parent_service.verify(&body).await?;
    Ok(Json(ApiResponse::ok(view)))
}
