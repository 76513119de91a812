//! Google Drive API client configuration.

use serde::{Deserialize, Serialize};

/// Google Drive v3 REST client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Base URL of the Drive v3 API.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Base URL of the Drive v3 upload endpoint.
    #[serde(default = "default_upload_base")]
    pub upload_base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum retry attempts after the initial request.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Base backoff between retries in milliseconds (doubles per attempt).
    #[serde(default = "default_backoff")]
    pub retry_backoff_ms: u64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            upload_base_url: default_upload_base(),
            request_timeout_seconds: default_timeout(),
            max_retries: default_retries(),
            retry_backoff_ms: default_backoff(),
        }
    }
}

fn default_api_base() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_upload_base() -> String {
    "https://www.googleapis.com/upload/drive/v3".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

fn default_backoff() -> u64 {
    250
}
