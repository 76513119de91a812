//! Student file repository implementation.

use sqlx::SqlitePool;

use malaf_core::error::{AppError, ErrorKind};
use malaf_core::result::AppResult;
use malaf_entity::file::{CreateStudentFile, StudentFile};

/// Repository for uploaded file records.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: SqlitePool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an active file record by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<StudentFile>> {
        sqlx::query_as::<_, StudentFile>("SELECT * FROM files WHERE id = $1 AND is_active = 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List active files of a student, newest first.
    pub async fn find_by_student(
        &self,
        teacher_id: i64,
        student_civil_id: &str,
    ) -> AppResult<Vec<StudentFile>> {
        sqlx::query_as::<_, StudentFile>(
            "SELECT * FROM files \
             WHERE teacher_id = $1 AND student_civil_id = $2 AND is_active = 1 \
             ORDER BY upload_date DESC",
        )
        .bind(teacher_id)
        .bind(student_civil_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Record an uploaded file.
    pub async fn create(&self, data: &CreateStudentFile) -> AppResult<StudentFile> {
        sqlx::query_as::<_, StudentFile>(
            "INSERT INTO files (student_civil_id, subject_name, file_category, original_name, \
                                system_name, drive_file_id, file_url, file_size, file_type, \
                                teacher_id, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(&data.student_civil_id)
        .bind(&data.subject_name)
        .bind(&data.file_category)
        .bind(&data.original_name)
        .bind(&data.system_name)
        .bind(&data.drive_file_id)
        .bind(&data.file_url)
        .bind(data.file_size)
        .bind(&data.file_type)
        .bind(data.teacher_id)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record file", e))
    }

    /// Soft-delete a file record.
    pub async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE files SET is_active = 0 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count active files of a teacher.
    pub async fn count_by_teacher(&self, teacher_id: i64) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM files WHERE teacher_id = $1 AND is_active = 1",
        )
        .bind(teacher_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(count as u64)
    }
}
