//! Core building blocks shared by every Malaf crate: the unified error
//! type, configuration loading, and the Google Drive API boundary trait.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
