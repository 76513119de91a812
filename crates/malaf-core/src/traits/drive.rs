//! Google Drive API boundary trait.
//!
//! The trait is defined here in `malaf-core` and implemented in
//! `malaf-drive` (HTTP) and by scripted fakes in tests. Every method takes
//! the teacher's OAuth access token because Drive access is per-teacher.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A folder node in Google Drive. The `id` is an opaque handle owned by
/// the external system; Malaf never assumes it can reconstruct a handle's
/// children without re-querying Drive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DriveFolder {
    /// Opaque Drive file ID.
    pub id: String,
    /// Folder display name.
    pub name: String,
}

/// A non-folder file created in Drive.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DriveFile {
    /// Opaque Drive file ID.
    pub id: String,
    /// Browser-viewable URL for the file.
    pub view_url: String,
}

/// Trait for the Google Drive folder/file operations Malaf consumes.
#[async_trait]
pub trait DriveApi: Send + Sync + std::fmt::Debug + 'static {
    /// List non-trashed folders with an exact name match under a parent.
    /// `parent = None` searches the Drive root.
    async fn list_folders(
        &self,
        access_token: &str,
        name: &str,
        parent: Option<&str>,
    ) -> AppResult<Vec<DriveFolder>>;

    /// Create a folder under a parent (Drive root when `parent = None`).
    async fn create_folder(
        &self,
        access_token: &str,
        name: &str,
        parent: Option<&str>,
    ) -> AppResult<DriveFolder>;

    /// Grant anyone-with-link read access to a file or folder.
    async fn grant_anyone_reader(&self, access_token: &str, file_id: &str) -> AppResult<()>;

    /// Upload a file into a folder and return its handle and view URL.
    async fn upload_file(
        &self,
        access_token: &str,
        parent: &str,
        name: &str,
        data: Bytes,
        mime_type: &str,
    ) -> AppResult<DriveFile>;

    /// Permanently delete a file or folder (with its contents).
    async fn delete_file(&self, access_token: &str, file_id: &str) -> AppResult<()>;
}
