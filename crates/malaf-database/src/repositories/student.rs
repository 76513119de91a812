//! Student repository implementation.

use sqlx::SqlitePool;

use malaf_core::error::{AppError, ErrorKind};
use malaf_core::result::AppResult;
use malaf_entity::student::{CreateStudent, Student, UpdateStudent};

/// Repository for student CRUD and provisioning-state operations.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an active student by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1 AND is_active = 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })
    }

    /// Find a student of one teacher by civil ID.
    pub async fn find_by_civil_id(
        &self,
        teacher_id: i64,
        civil_id: &str,
    ) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students \
             WHERE teacher_id = $1 AND civil_id = $2 AND is_active = 1",
        )
        .bind(teacher_id)
        .bind(civil_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find student by civil id", e)
        })
    }

    /// List all active students of a teacher.
    pub async fn find_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students \
             WHERE teacher_id = $1 AND is_active = 1 \
             ORDER BY student_name ASC",
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    /// List active students whose Drive folder has not been provisioned.
    ///
    /// This is the upstream filter for the batch orchestrator: students
    /// with `folder_created = 1` never re-enter the worklist.
    pub async fn find_needing_folders(&self, teacher_id: i64) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students \
             WHERE teacher_id = $1 AND is_active = 1 AND folder_created = 0 \
             ORDER BY id ASC",
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unprovisioned students", e)
        })
    }

    /// Create a new student.
    pub async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (civil_id, student_name, grade, class_number, academic_year, teacher_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.civil_id)
        .bind(&data.student_name)
        .bind(&data.grade)
        .bind(data.class_number)
        .bind(&data.academic_year)
        .bind(data.teacher_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create student", e))
    }

    /// Update a student's mutable fields.
    pub async fn update(&self, id: i64, data: &UpdateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "UPDATE students SET student_name = COALESCE($2, student_name), \
                                 grade = COALESCE($3, grade), \
                                 class_number = COALESCE($4, class_number), \
                                 academic_year = COALESCE($5, academic_year) \
             WHERE id = $1 AND is_active = 1 RETURNING *",
        )
        .bind(id)
        .bind(&data.student_name)
        .bind(&data.grade)
        .bind(data.class_number)
        .bind(&data.academic_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update student", e))?
        .ok_or_else(|| AppError::not_found(format!("Student {id} not found")))
    }

    /// Persist a successful provisioning: set the sticky flag and handle.
    pub async fn mark_folder_created(&self, id: i64, folder_id: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE students SET folder_created = 1, drive_folder_id = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(folder_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark folder created", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Student {id} not found")));
        }
        Ok(())
    }

    /// Soft-delete a student.
    pub async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE students SET is_active = 0 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete student", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete every student of a teacher. Returns the number affected.
    pub async fn soft_delete_by_teacher(&self, teacher_id: i64) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE students SET is_active = 0 WHERE teacher_id = $1 AND is_active = 1")
                .bind(teacher_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete students", e)
                })?;
        Ok(result.rows_affected())
    }

    /// Count active students of a teacher.
    pub async fn count_by_teacher(&self, teacher_id: i64) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM students WHERE teacher_id = $1 AND is_active = 1",
        )
        .bind(teacher_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count students", e))?;
        Ok(count as u64)
    }
}
