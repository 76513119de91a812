//! HTTP request handlers, one module per resource.

pub mod file;
pub mod health;
pub mod parent;
pub mod provision;
pub mod student;
pub mod subject;
pub mod teacher;
