//! Captcha question entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question shown to parents during identity verification.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CaptchaQuestion {
    /// Unique question identifier.
    pub id: i64,
    /// The question text (Arabic).
    pub question: String,
    /// Expected answer. Withheld from API responses.
    #[serde(skip_serializing)]
    pub answer: String,
    /// Whether the question is in rotation.
    pub is_active: bool,
}
