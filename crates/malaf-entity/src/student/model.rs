//! Student entity model — the provisioning target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student record owned by exactly one teacher.
///
/// `folder_created` and `drive_folder_id` are the provisioning state:
/// once `folder_created` is set the batch orchestrator never re-attempts
/// this student, even if the remote folder was deleted out-of-band.
/// Local state is the single source of truth for "should I attempt again".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier.
    pub id: i64,
    /// National civil ID — the stable identifier parents verify with.
    pub civil_id: String,
    /// Full display name.
    pub student_name: String,
    /// Grade level.
    pub grade: String,
    /// Class number within the grade.
    pub class_number: i64,
    /// Academic year (e.g. `2024-2025`).
    pub academic_year: String,
    /// Owning teacher.
    pub teacher_id: i64,
    /// Whether the Drive folder tree has been provisioned.
    pub folder_created: bool,
    /// Handle of the student's top-level Drive folder.
    pub drive_folder_id: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_active: bool,
}

impl Student {
    /// Drive folder name for this student: `"{name} - {civil_id}"`.
    pub fn folder_name(&self) -> String {
        format!("{} - {}", self.student_name, self.civil_id)
    }
}

/// Data required to create a new student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudent {
    /// National civil ID.
    pub civil_id: String,
    /// Full display name.
    pub student_name: String,
    /// Grade level.
    pub grade: String,
    /// Class number.
    pub class_number: i64,
    /// Academic year.
    #[serde(default = "default_academic_year")]
    pub academic_year: String,
    /// Owning teacher.
    pub teacher_id: i64,
}

/// Mutable student fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudent {
    /// New display name.
    pub student_name: Option<String>,
    /// New grade level.
    pub grade: Option<String>,
    /// New class number.
    pub class_number: Option<i64>,
    /// New academic year.
    pub academic_year: Option<String>,
}

impl CreateStudent {
    /// The academic year assumed when a request omits one.
    pub fn default_academic_year() -> String {
        default_academic_year()
    }
}

fn default_academic_year() -> String {
    "2024-2025".to_string()
}
