//! Folder provisioning outcome and report types.

pub mod report;

pub use report::{BatchReport, ProvisionOutcome};
