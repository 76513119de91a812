//! Parent access service.
//!
//! Guardians verify with the teacher's link code, the child's civil ID,
//! and a captcha answer; on success they get a read-only view of the
//! student's files grouped by subject and category, plus the Drive
//! folder link. Bad link codes and wrong captcha answers both come back
//! as authentication failures so the endpoint leaks nothing about which
//! part was wrong.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_database::repositories::captcha::CaptchaRepository;
use malaf_database::repositories::file::FileRepository;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::teacher::TeacherRepository;
use malaf_entity::captcha::CaptchaQuestion;

/// Parent verification request.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    /// The teacher's parent-access link code.
    pub link_code: String,
    /// The child's civil ID.
    pub civil_id: String,
    /// ID of the captcha question that was answered.
    pub captcha_id: i64,
    /// The guardian's answer.
    pub captcha_answer: String,
}

/// One file in the parent-facing view.
#[derive(Debug, Clone, Serialize)]
pub struct ParentFileView {
    /// Original filename.
    pub name: String,
    /// Browser-viewable Drive URL.
    pub url: String,
    /// Upload timestamp (RFC 3339).
    pub uploaded_at: String,
    /// Optional teacher-provided description.
    pub description: Option<String>,
}

/// The read-only view returned to a verified guardian.
#[derive(Debug, Clone, Serialize)]
pub struct ParentView {
    /// Student display name.
    pub student_name: String,
    /// Grade (Arabic).
    pub grade: String,
    /// Class number.
    pub class_number: i64,
    /// Academic year.
    pub academic_year: String,
    /// Teacher display name.
    pub teacher_name: String,
    /// School name, when the teacher set one.
    pub school_name: Option<String>,
    /// Drive folder URL of the student, when provisioned.
    pub folder_url: Option<String>,
    /// Files grouped by subject, then by category, newest first within
    /// each category.
    pub files: BTreeMap<String, BTreeMap<String, Vec<ParentFileView>>>,
}

/// Parent-facing operations.
#[derive(Debug, Clone)]
pub struct ParentAccessService {
    teacher_repo: Arc<TeacherRepository>,
    student_repo: Arc<StudentRepository>,
    file_repo: Arc<FileRepository>,
    captcha_repo: Arc<CaptchaRepository>,
}

impl ParentAccessService {
    /// Creates a new parent access service.
    pub fn new(
        teacher_repo: Arc<TeacherRepository>,
        student_repo: Arc<StudentRepository>,
        file_repo: Arc<FileRepository>,
        captcha_repo: Arc<CaptchaRepository>,
    ) -> Self {
        Self {
            teacher_repo,
            student_repo,
            file_repo,
            captcha_repo,
        }
    }

    /// A random active captcha question. The answer field is withheld by
    /// the entity's serialization.
    pub async fn random_captcha(&self) -> AppResult<CaptchaQuestion> {
        self.captcha_repo
            .find_random_active()
            .await?
            .ok_or_else(|| AppError::service_unavailable("No captcha questions available"))
    }

    /// Verify a guardian and build the read-only student view.
    pub async fn verify(&self, request: &VerifyRequest) -> AppResult<ParentView> {
        self.check_captcha(request.captcha_id, &request.captcha_answer)
            .await?;

        let link_code = request.link_code.trim();
        let teacher = self
            .teacher_repo
            .find_by_link_code(link_code)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid access code"))?;

        let civil_id = request.civil_id.trim();
        let student = self
            .student_repo
            .find_by_civil_id(teacher.id, civil_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let mut files: BTreeMap<String, BTreeMap<String, Vec<ParentFileView>>> = BTreeMap::new();
        for record in self
            .file_repo
            .find_by_student(teacher.id, &student.civil_id)
            .await?
        {
            files
                .entry(record.subject_name.clone())
                .or_default()
                .entry(record.file_category.clone())
                .or_default()
                .push(ParentFileView {
                    name: record.original_name,
                    url: record.file_url,
                    uploaded_at: record.upload_date.to_rfc3339(),
                    description: record.description,
                });
        }

        info!(
            teacher_id = teacher.id,
            student_id = student.id,
            "Parent access verified"
        );

        Ok(ParentView {
            student_name: student.student_name,
            grade: student.grade,
            class_number: student.class_number,
            academic_year: student.academic_year,
            teacher_name: teacher.name,
            school_name: teacher.school_name,
            folder_url: student
                .drive_folder_id
                .map(|id| format!("https://drive.google.com/drive/folders/{id}")),
            files,
        })
    }

    async fn check_captcha(&self, captcha_id: i64, answer: &str) -> AppResult<()> {
        let question = self
            .captcha_repo
            .find_by_id(captcha_id)
            .await?
            .filter(|q| q.is_active)
            .ok_or_else(|| AppError::authentication("Captcha verification failed"))?;

        if question.answer.trim() != answer.trim() {
            return Err(AppError::authentication("Captcha verification failed"));
        }
        Ok(())
    }
}
