//! Google Drive v3 REST client.
//!
//! Every request carries the teacher's bearer token, a per-request timeout,
//! and bounded retry with exponential backoff on transient failures
//! (network errors, 429, 5xx). Non-transient Drive errors surface their
//! response body verbatim in the error message.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use tracing::{debug, warn};

use malaf_core::config::drive::DriveConfig;
use malaf_core::error::{AppError, ErrorKind};
use malaf_core::result::AppResult;
use malaf_core::traits::drive::{DriveApi, DriveFile, DriveFolder};

const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// HTTP implementation of [`DriveApi`] against the Drive v3 REST API.
#[derive(Debug, Clone)]
pub struct HttpDriveClient {
    http: reqwest::Client,
    config: DriveConfig,
}

#[derive(Debug, Deserialize)]
struct FileListResponse {
    #[serde(default)]
    files: Vec<FileResource>,
}

#[derive(Debug, Deserialize)]
struct FileResource {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "webViewLink")]
    web_view_link: Option<String>,
}

impl HttpDriveClient {
    /// Build a client from configuration.
    pub fn new(config: DriveConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;
        Ok(Self { http, config })
    }

    /// Send a request, retrying transient failures with exponential backoff.
    async fn send_with_retry<F>(&self, op: &str, build: F) -> AppResult<reqwest::Response>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        loop {
            match build().send().await {
                Ok(res) if res.status().is_success() => return Ok(res),
                Ok(res) => {
                    let status = res.status();
                    let retryable = status.as_u16() == 429 || status.is_server_error();
                    if !retryable || attempt >= self.config.max_retries {
                        return Err(Self::status_error(op, res).await);
                    }
                }
                // Connect/timeout errors are worth retrying.
                Err(e) => {
                    if attempt >= self.config.max_retries {
                        return Err(AppError::with_source(
                            ErrorKind::ExternalService,
                            format!("Drive {op} request failed: {e}"),
                            e,
                        ));
                    }
                }
            }

            let backoff = self.config.retry_backoff_ms.saturating_mul(1 << attempt);
            warn!(op, attempt, backoff_ms = backoff, "Retrying Drive request");
            tokio::time::sleep(Duration::from_millis(backoff)).await;
            attempt += 1;
        }
    }

    /// Map a non-success Drive response into an `AppError`, preserving the
    /// response body verbatim.
    async fn status_error(op: &str, res: reqwest::Response) -> AppError {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        let kind = match status.as_u16() {
            401 | 403 => ErrorKind::Authentication,
            404 => ErrorKind::NotFound,
            _ => ErrorKind::ExternalService,
        };
        AppError::new(kind, format!("Drive {op} failed ({status}): {body}"))
    }
}

/// Escape single quotes in a Drive query string value.
fn escape_query_value(value: &str) -> String {
    value.replace('\'', "\\'")
}

#[async_trait]
impl DriveApi for HttpDriveClient {
    async fn list_folders(
        &self,
        access_token: &str,
        name: &str,
        parent: Option<&str>,
    ) -> AppResult<Vec<DriveFolder>> {
        let mut query = format!(
            "name='{}' and mimeType='{FOLDER_MIME_TYPE}' and trashed=false",
            escape_query_value(name)
        );
        if let Some(parent) = parent {
            query = format!("'{}' in parents and {query}", escape_query_value(parent));
        }

        let url = format!("{}/files", self.config.api_base_url);
        let token = access_token.to_string();
        let res = self
            .send_with_retry("list folders", || {
                self.http
                    .get(&url)
                    .bearer_auth(&token)
                    .query(&[
                        ("q", query.as_str()),
                        ("fields", "files(id,name)"),
                        ("spaces", "drive"),
                    ])
            })
            .await?;

        let list: FileListResponse = res.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to parse folder listing: {e}"),
                e,
            )
        })?;

        debug!(name, count = list.files.len(), "Listed Drive folders");
        Ok(list
            .files
            .into_iter()
            .map(|f| DriveFolder {
                id: f.id,
                name: f.name,
            })
            .collect())
    }

    async fn create_folder(
        &self,
        access_token: &str,
        name: &str,
        parent: Option<&str>,
    ) -> AppResult<DriveFolder> {
        let mut body = serde_json::json!({
            "name": name,
            "mimeType": FOLDER_MIME_TYPE,
        });
        if let Some(parent) = parent {
            body["parents"] = serde_json::json!([parent]);
        }

        let url = format!("{}/files", self.config.api_base_url);
        let token = access_token.to_string();
        let res = self
            .send_with_retry("create folder", || {
                self.http
                    .post(&url)
                    .bearer_auth(&token)
                    .query(&[("fields", "id,name")])
                    .json(&body)
            })
            .await?;

        let created: FileResource = res.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to parse created folder: {e}"),
                e,
            )
        })?;

        debug!(name, id = %created.id, "Created Drive folder");
        Ok(DriveFolder {
            id: created.id,
            name: created.name,
        })
    }

    async fn grant_anyone_reader(&self, access_token: &str, file_id: &str) -> AppResult<()> {
        let url = format!("{}/files/{file_id}/permissions", self.config.api_base_url);
        let body = serde_json::json!({ "role": "reader", "type": "anyone" });
        let token = access_token.to_string();

        self.send_with_retry("grant permission", || {
            self.http.post(&url).bearer_auth(&token).json(&body)
        })
        .await?;

        debug!(file_id, "Granted anyone-with-link reader access");
        Ok(())
    }

    async fn upload_file(
        &self,
        access_token: &str,
        parent: &str,
        name: &str,
        data: Bytes,
        mime_type: &str,
    ) -> AppResult<DriveFile> {
        let boundary = format!("malaf-{}", uuid::Uuid::new_v4());
        let metadata = serde_json::json!({ "name": name, "parents": [parent] });

        // Drive multipart uploads require a multipart/related body:
        // a JSON metadata part followed by the media part.
        let mut body = Vec::with_capacity(data.len() + 512);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
        body.extend_from_slice(metadata.to_string().as_bytes());
        body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
        body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(&data);
        body.extend_from_slice(format!("\r\n--{boundary}--").as_bytes());
        let body = Bytes::from(body);

        let url = format!("{}/files", self.config.upload_base_url);
        let content_type = format!("multipart/related; boundary={boundary}");
        let token = access_token.to_string();

        let res = self
            .send_with_retry("upload file", || {
                self.http
                    .post(&url)
                    .bearer_auth(&token)
                    .query(&[("uploadType", "multipart"), ("fields", "id,webViewLink")])
                    .header(reqwest::header::CONTENT_TYPE, content_type.clone())
                    .body(body.clone())
            })
            .await?;

        let uploaded: FileResource = res.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to parse uploaded file: {e}"),
                e,
            )
        })?;

        let view_url = uploaded.web_view_link.unwrap_or_else(|| {
            format!("https://drive.google.com/file/d/{}/view", uploaded.id)
        });

        debug!(name, id = %uploaded.id, "Uploaded file to Drive");
        Ok(DriveFile {
            id: uploaded.id,
            view_url,
        })
    }

    async fn delete_file(&self, access_token: &str, file_id: &str) -> AppResult<()> {
        let url = format!("{}/files/{file_id}", self.config.api_base_url);
        let token = access_token.to_string();

        self.send_with_retry("delete file", || {
            self.http.delete(&url).bearer_auth(&token)
        })
        .await?;

        debug!(file_id, "Deleted Drive file");
        Ok(())
    }
}
