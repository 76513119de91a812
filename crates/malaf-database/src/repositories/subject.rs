//! Subject repository implementation.

use sqlx::SqlitePool;

use malaf_core::error::{AppError, ErrorKind};
use malaf_core::result::AppResult;
use malaf_entity::subject::Subject;

/// Repository for subjects and their teacher/student associations.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    pool: SqlitePool,
}

impl SubjectRepository {
    /// Create a new subject repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all subjects.
    pub async fn find_all(&self) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subjects", e))
    }

    /// Find a subject by its Arabic name.
    pub async fn find_by_name(&self, name_ar: &str) -> AppResult<Option<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects WHERE name_ar = $1")
            .bind(name_ar)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find subject by name", e)
            })
    }

    /// Create a subject, returning the existing row when the name is taken.
    pub async fn create(&self, name_ar: &str) -> AppResult<Subject> {
        if let Some(existing) = self.find_by_name(name_ar).await? {
            return Ok(existing);
        }
        sqlx::query_as::<_, Subject>("INSERT INTO subjects (name_ar) VALUES ($1) RETURNING *")
            .bind(name_ar)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create subject", e))
    }

    /// Subjects associated with a student, in association order.
    pub async fn find_for_student(&self, student_id: i64) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, Subject>(
            "SELECT s.* FROM subjects s \
             JOIN student_subjects ss ON ss.subject_id = s.id \
             WHERE ss.student_id = $1 \
             ORDER BY s.id ASC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student subjects", e)
        })
    }

    /// Subjects a teacher teaches.
    pub async fn find_for_teacher(&self, teacher_id: i64) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, Subject>(
            "SELECT s.* FROM subjects s \
             JOIN teacher_subjects ts ON ts.subject_id = s.id \
             WHERE ts.teacher_id = $1 \
             ORDER BY s.id ASC",
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list teacher subjects", e)
        })
    }

    /// Replace a student's subject associations.
    pub async fn set_student_subjects(
        &self,
        student_id: i64,
        subject_ids: &[i64],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM student_subjects WHERE student_id = $1")
            .bind(student_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear student subjects", e)
            })?;

        for subject_id in subject_ids {
            sqlx::query("INSERT INTO student_subjects (student_id, subject_id) VALUES ($1, $2)")
                .bind(student_id)
                .bind(subject_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to link subject", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Replace a teacher's subject associations.
    pub async fn set_teacher_subjects(
        &self,
        teacher_id: i64,
        subject_ids: &[i64],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM teacher_subjects WHERE teacher_id = $1")
            .bind(teacher_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear teacher subjects", e)
            })?;

        for subject_id in subject_ids {
            sqlx::query("INSERT INTO teacher_subjects (teacher_id, subject_id) VALUES ($1, $2)")
                .bind(teacher_id)
                .bind(subject_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to link subject", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }
}
