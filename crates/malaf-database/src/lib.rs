//! SQLite persistence for Malaf: connection pool, migration runner, and
//! one repository per entity.

pub mod connection;
pub mod migration;
pub mod repositories;
