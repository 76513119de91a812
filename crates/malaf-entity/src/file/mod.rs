//! Student file records and categories.

pub mod category;
pub mod model;

pub use category::FileCategory;
pub use model::{CreateStudentFile, StudentFile};
