//! File upload routing into the student's Drive folder tree.

pub mod service;

pub use service::{FileService, UploadRequest};
