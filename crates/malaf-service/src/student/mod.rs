//! Student roster management.

pub mod service;

pub use service::StudentService;
