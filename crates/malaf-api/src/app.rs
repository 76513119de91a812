//! Application builder — wires repositories, services, router, and
//! state into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

use malaf_core::config::AppConfig;
use malaf_core::error::AppError;
use malaf_core::traits::drive::DriveApi;
use malaf_database::repositories::captcha::CaptchaRepository;
use malaf_database::repositories::file::FileRepository;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::subject::SubjectRepository;
use malaf_database::repositories::teacher::TeacherRepository;
use malaf_service::file::FileService;
use malaf_service::parent::ParentAccessService;
use malaf_service::provision::{BatchLock, BatchProvisionService, StudentProvisioner};
use malaf_service::student::StudentService;
use malaf_service::teacher::TeacherService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from its infrastructure pieces.
pub fn build_state(config: AppConfig, db_pool: SqlitePool, drive: Arc<dyn DriveApi>) -> AppState {
    let teacher_repo = Arc::new(TeacherRepository::new(db_pool.clone()));
    let student_repo = Arc::new(StudentRepository::new(db_pool.clone()));
    let subject_repo = Arc::new(SubjectRepository::new(db_pool.clone()));
    let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
    let captcha_repo = Arc::new(CaptchaRepository::new(db_pool.clone()));

    let provisioner = StudentProvisioner::new(
        Arc::clone(&drive),
        Arc::clone(&subject_repo),
        config.provisioning.clone(),
    );
    let provision_service = Arc::new(BatchProvisionService::new(
        provisioner,
        Arc::clone(&student_repo),
        Arc::clone(&teacher_repo),
        BatchLock::new(),
        config.provisioning.clone(),
    ));
    let teacher_service = Arc::new(TeacherService::new(
        Arc::clone(&teacher_repo),
        Arc::clone(&student_repo),
        Arc::clone(&file_repo),
        Arc::clone(&subject_repo),
    ));
    let student_service = Arc::new(StudentService::new(
        Arc::clone(&student_repo),
        Arc::clone(&subject_repo),
        Arc::clone(&teacher_repo),
        Arc::clone(&drive),
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&drive),
        Arc::clone(&file_repo),
        Arc::clone(&student_repo),
        Arc::clone(&teacher_repo),
    ));
    let parent_service = Arc::new(ParentAccessService::new(
        Arc::clone(&teacher_repo),
        Arc::clone(&student_repo),
        Arc::clone(&file_repo),
        Arc::clone(&captcha_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        drive,
        teacher_repo,
        student_repo,
        subject_repo,
        file_repo,
        captcha_repo,
        teacher_service,
        student_service,
        file_service,
        provision_service,
        parent_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Malaf server with the given state until interrupted.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Malaf server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    // Failure to install the handler leaves no way to stop cleanly.
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
