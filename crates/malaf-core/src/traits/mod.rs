//! Trait boundaries defined in `malaf-core` and implemented elsewhere.

pub mod drive;

pub use drive::{DriveApi, DriveFile, DriveFolder};
