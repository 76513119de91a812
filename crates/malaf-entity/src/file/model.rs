//! Student file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file uploaded for a student and routed into their Drive folder tree.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentFile {
    /// Unique file record identifier.
    pub id: i64,
    /// Civil ID of the student the file belongs to.
    pub student_civil_id: String,
    /// Subject folder the file was routed into (Arabic name).
    pub subject_name: String,
    /// File category (Arabic label, also the Drive subfolder name).
    pub file_category: String,
    /// Original upload filename.
    pub original_name: String,
    /// Collision-free generated filename.
    pub system_name: String,
    /// Handle of the file in Google Drive.
    pub drive_file_id: String,
    /// Browser-viewable Drive URL.
    pub file_url: String,
    /// File size in bytes.
    pub file_size: Option<i64>,
    /// MIME type.
    pub file_type: Option<String>,
    /// When the file was uploaded.
    pub upload_date: DateTime<Utc>,
    /// Uploading teacher.
    pub teacher_id: i64,
    /// Optional description shown to parents.
    pub description: Option<String>,
    /// Soft-delete flag.
    pub is_active: bool,
}

/// Data required to record an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentFile {
    /// Civil ID of the student.
    pub student_civil_id: String,
    /// Subject folder name.
    pub subject_name: String,
    /// File category label.
    pub file_category: String,
    /// Original upload filename.
    pub original_name: String,
    /// Generated filename.
    pub system_name: String,
    /// Drive file handle.
    pub drive_file_id: String,
    /// Drive view URL.
    pub file_url: String,
    /// File size in bytes.
    pub file_size: Option<i64>,
    /// MIME type.
    pub file_type: Option<String>,
    /// Uploading teacher.
    pub teacher_id: i64,
    /// Optional description.
    pub description: Option<String>,
}
