//! # malaf-api
//!
//! HTTP API layer for Malaf built on Axum.
//!
//! Provides the REST endpoints, request-logging middleware, DTOs, and
//! the `AppError` to HTTP response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
