//! Folder provisioning configuration.

use serde::{Deserialize, Serialize};

/// Batch folder provisioning configuration.
///
/// Chunked batches bound the number of concurrent Drive API calls; the
/// inter-chunk pause is a simple fixed rate limit, not an adaptive backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisioningConfig {
    /// Number of students provisioned concurrently per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Pause between chunks in milliseconds.
    #[serde(default = "default_chunk_delay")]
    pub inter_chunk_delay_ms: u64,
    /// Subject label used when a student has no associated subjects.
    #[serde(default = "default_subject_label")]
    pub default_subject_label: String,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            inter_chunk_delay_ms: default_chunk_delay(),
            default_subject_label: default_subject_label(),
        }
    }
}

fn default_chunk_size() -> usize {
    3
}

fn default_chunk_delay() -> u64 {
    500
}

fn default_subject_label() -> String {
    "عام".to_string()
}
