//! Business services for Malaf.
//!
//! The `provision` module carries the system's core logic: mapping
//! (teacher, student, subject) onto a Google Drive folder hierarchy and
//! batch-provisioning folder trees with bounded concurrency.

pub mod file;
pub mod parent;
pub mod provision;
pub mod student;
pub mod teacher;
