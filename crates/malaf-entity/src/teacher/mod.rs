//! Teacher entity.

pub mod model;

pub use model::{CreateTeacher, Teacher, UpdateTeacher};
