//! Request DTOs.

use serde::Deserialize;

/// PUT /teachers/{id} — profile update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeacherRequest {
    /// New school name.
    pub school_name: Option<String>,
    /// Replacement list of taught subjects (Arabic names).
    pub subjects: Option<Vec<String>>,
}

/// PUT /teachers/{id}/drive-folder — set the Drive root.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDriveFolderRequest {
    /// Drive folder link or bare folder ID.
    pub folder: String,
}

/// POST /teachers/{id}/students — create one student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    /// National civil ID.
    pub civil_id: String,
    /// Student display name.
    pub student_name: String,
    /// Grade (Arabic).
    pub grade: String,
    /// Class number.
    pub class_number: i64,
    /// Academic year; defaults server-side when omitted.
    pub academic_year: Option<String>,
    /// Subject names (Arabic) to associate.
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// PUT /students/{id} — update student fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    /// New display name.
    pub student_name: Option<String>,
    /// New grade.
    pub grade: Option<String>,
    /// New class number.
    pub class_number: Option<i64>,
    /// New academic year.
    pub academic_year: Option<String>,
    /// Replacement subject list; `None` leaves associations untouched.
    pub subjects: Option<Vec<String>>,
}
