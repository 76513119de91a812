//! Repository implementations, one per entity.

pub mod captcha;
pub mod file;
pub mod student;
pub mod subject;
pub mod teacher;
