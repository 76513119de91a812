//! Google Drive integration: the HTTP client implementing
//! [`malaf_core::traits::DriveApi`] and the folder path resolver.

pub mod client;
pub mod resolver;

pub use client::HttpDriveClient;
pub use resolver::resolve_path;
