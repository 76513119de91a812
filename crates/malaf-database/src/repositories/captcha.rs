//! Captcha question repository implementation.

use sqlx::SqlitePool;

use malaf_core::error::{AppError, ErrorKind};
use malaf_core::result::AppResult;
use malaf_entity::captcha::CaptchaQuestion;

/// Repository for parent-verification captcha questions.
#[derive(Debug, Clone)]
pub struct CaptchaRepository {
    pool: SqlitePool,
}

impl CaptchaRepository {
    /// Create a new captcha repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Pick a random active question.
    pub async fn find_random_active(&self) -> AppResult<Option<CaptchaQuestion>> {
        sqlx::query_as::<_, CaptchaQuestion>(
            "SELECT * FROM captcha_questions WHERE is_active = 1 ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to pick captcha", e))
    }

    /// Find a question by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<CaptchaQuestion>> {
        sqlx::query_as::<_, CaptchaQuestion>("SELECT * FROM captcha_questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find captcha", e))
    }

    /// Create a question.
    pub async fn create(&self, question: &str, answer: &str) -> AppResult<CaptchaQuestion> {
        sqlx::query_as::<_, CaptchaQuestion>(
            "INSERT INTO captcha_questions (question, answer) VALUES ($1, $2) RETURNING *",
        )
        .bind(question)
        .bind(answer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create captcha", e))
    }
}
