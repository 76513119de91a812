//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use malaf_core::config::AppConfig;
use malaf_core::traits::drive::DriveApi;

use malaf_database::repositories::captcha::CaptchaRepository;
use malaf_database::repositories::file::FileRepository;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::subject::SubjectRepository;
use malaf_database::repositories::teacher::TeacherRepository;

use malaf_service::file::FileService;
use malaf_service::parent::ParentAccessService;
use malaf_service::provision::BatchProvisionService;
use malaf_service::student::StudentService;
use malaf_service::teacher::TeacherService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped or cheaply cloneable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool.
    pub db_pool: SqlitePool,
    /// Google Drive API boundary.
    pub drive: Arc<dyn DriveApi>,

    /// Teacher repository.
    pub teacher_repo: Arc<TeacherRepository>,
    /// Student repository.
    pub student_repo: Arc<StudentRepository>,
    /// Subject repository.
    pub subject_repo: Arc<SubjectRepository>,
    /// File repository.
    pub file_repo: Arc<FileRepository>,
    /// Captcha repository.
    pub captcha_repo: Arc<CaptchaRepository>,

    /// Teacher profile/stats service.
    pub teacher_service: Arc<TeacherService>,
    /// Student roster service.
    pub student_service: Arc<StudentService>,
    /// File upload service.
    pub file_service: Arc<FileService>,
    /// Batch folder provisioning service.
    pub provision_service: Arc<BatchProvisionService>,
    /// Parent access service.
    pub parent_service: Arc<ParentAccessService>,
}
