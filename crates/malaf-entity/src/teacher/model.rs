//! Teacher entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A teacher account owning students and their Drive folder tree.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: i64,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// School name (set during onboarding).
    pub school_name: Option<String>,
    /// Handle of the teacher's root folder in Google Drive. All student
    /// folders are provisioned under it; its absence is a hard precondition
    /// failure for provisioning.
    pub drive_folder_id: Option<String>,
    /// OAuth access token for the teacher's Drive account.
    /// Never serialized into API responses.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// Code embedded in the parent-access link for this teacher's class.
    pub link_code: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Last login timestamp.
    pub last_login: Option<DateTime<Utc>>,
    /// Whether the account is active.
    pub is_active: bool,
}

impl Teacher {
    /// Browser URL of the teacher's root Drive folder, if configured.
    pub fn drive_folder_url(&self) -> Option<String> {
        self.drive_folder_id
            .as_deref()
            .map(|id| format!("https://drive.google.com/drive/folders/{id}"))
    }
}

/// Data required to create a new teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeacher {
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// School name.
    pub school_name: Option<String>,
    /// Parent-access link code.
    pub link_code: Option<String>,
}

/// Mutable teacher profile fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTeacher {
    /// New school name.
    pub school_name: Option<String>,
    /// New Drive root folder handle.
    pub drive_folder_id: Option<String>,
    /// New Drive access token.
    pub access_token: Option<String>,
}
