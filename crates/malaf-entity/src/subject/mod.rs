//! Subject entity.

pub mod model;

pub use model::Subject;
