//! Teacher repository implementation.

use sqlx::SqlitePool;

use malaf_core::error::{AppError, ErrorKind};
use malaf_core::result::AppResult;
use malaf_entity::teacher::{CreateTeacher, Teacher, UpdateTeacher};

/// Repository for teacher CRUD and query operations.
#[derive(Debug, Clone)]
pub struct TeacherRepository {
    pool: SqlitePool,
}

impl TeacherRepository {
    /// Create a new teacher repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a teacher by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Teacher>> {
        sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find teacher by id", e)
            })
    }

    /// Find a teacher by parent-access link code.
    pub async fn find_by_link_code(&self, link_code: &str) -> AppResult<Option<Teacher>> {
        sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE link_code = $1")
            .bind(link_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find teacher by link code", e)
            })
    }

    /// Find a teacher by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Teacher>> {
        sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find teacher by email", e)
            })
    }

    /// Create a new teacher.
    pub async fn create(&self, data: &CreateTeacher) -> AppResult<Teacher> {
        sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (email, name, school_name, link_code) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.school_name)
        .bind(&data.link_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Link code already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create teacher", e),
        })
    }

    /// Update a teacher's mutable profile fields.
    pub async fn update(&self, id: i64, data: &UpdateTeacher) -> AppResult<Teacher> {
        sqlx::query_as::<_, Teacher>(
            "UPDATE teachers SET school_name = COALESCE($2, school_name), \
                                 drive_folder_id = COALESCE($3, drive_folder_id), \
                                 access_token = COALESCE($4, access_token) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.school_name)
        .bind(&data.drive_folder_id)
        .bind(&data.access_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update teacher", e))?
        .ok_or_else(|| AppError::not_found(format!("Teacher {id} not found")))
    }

    /// Set (or replace) the teacher's Drive root folder handle.
    pub async fn set_drive_folder(&self, id: i64, folder_id: &str) -> AppResult<Teacher> {
        sqlx::query_as::<_, Teacher>(
            "UPDATE teachers SET drive_folder_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(folder_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set drive folder", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Teacher {id} not found")))
    }

    /// Replace the teacher's parent-access link code.
    pub async fn set_link_code(&self, id: i64, link_code: &str) -> AppResult<Teacher> {
        sqlx::query_as::<_, Teacher>(
            "UPDATE teachers SET link_code = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(link_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Link code already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to set link code", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Teacher {id} not found")))
    }

    /// Update last login timestamp.
    pub async fn touch_last_login(&self, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE teachers SET last_login = datetime('now') WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }
}
