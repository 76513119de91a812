//! Parent access: captcha challenge and identity verification.

pub mod service;

pub use service::{ParentAccessService, ParentFileView, ParentView, VerifyRequest};
