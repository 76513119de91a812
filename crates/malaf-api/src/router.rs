//! Route definitions for the Malaf HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;
    let cors = build_cors_layer(&state.config.server);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(subject_routes())
        .merge(teacher_routes())
        .merge(student_routes())
        .merge(provision_routes())
        .merge(file_routes())
        .merge(parent_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn subject_routes() -> Router<AppState> {
    Router::new().route("/subjects", get(handlers::subject::list_subjects))
}

/// Teacher profile, Drive root, link code, stats
fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/teachers/{id}", get(handlers::teacher::get_teacher))
        .route("/teachers/{id}", put(handlers::teacher::update_teacher))
        .route(
            "/teachers/{id}/drive-folder",
            put(handlers::teacher::set_drive_folder),
        )
        .route(
            "/teachers/{id}/link-code",
            post(handlers::teacher::regenerate_link_code),
        )
        .route("/teachers/{id}/stats", get(handlers::teacher::get_stats))
}

/// Student roster CRUD
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/{id}/students",
            get(handlers::student::list_students),
        )
        .route(
            "/teachers/{id}/students",
            post(handlers::student::create_student),
        )
        .route(
            "/teachers/{id}/students",
            delete(handlers::student::delete_all_students),
        )
        .route(
            "/teachers/{id}/students/{sid}",
            delete(handlers::student::delete_student),
        )
        .route("/students/{id}", put(handlers::student::update_student))
        .route(
            "/students/{id}/subjects",
            get(handlers::student::get_student_subjects),
        )
}

/// Drive folder provisioning
fn provision_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/{id}/students/folders",
            post(handlers::provision::provision_folders),
        )
        .route(
            "/students/{id}/folder",
            post(handlers::provision::provision_single),
        )
}

/// File upload, listing, deletion
fn file_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/{id}/students/{sid}/files",
            post(handlers::file::upload_file),
        )
        .route(
            "/teachers/{id}/students/{sid}/files",
            get(handlers::file::list_files),
        )
        .route(
            "/teachers/{id}/files/{fid}",
            delete(handlers::file::delete_file),
        )
}

/// Parent access: captcha and verification
fn parent_routes() -> Router<AppState> {
    Router::new()
        .route("/captcha", get(handlers::parent::get_captcha))
        .route("/parent/verify", post(handlers::parent::verify))
}
