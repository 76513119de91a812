//! Teacher profile, Drive root configuration, and dashboard stats.

pub mod service;

pub use service::{TeacherService, TeacherStats};
