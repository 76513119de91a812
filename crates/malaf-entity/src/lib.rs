//! Domain entities for Malaf: teachers, students, subjects, files,
//! captcha questions, and folder provisioning reports.

pub mod captcha;
pub mod file;
pub mod provision;
pub mod student;
pub mod subject;
pub mod teacher;
