//! File upload service.
//!
//! An upload for (student, subject, category) is routed into the Drive
//! tree `root / "{name} - {civil_id}" / subject / category` via the same
//! path resolver the provisioner uses, so category subfolders are
//! materialized lazily by the first upload that needs them.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_core::traits::drive::DriveApi;
use malaf_database::repositories::file::FileRepository;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::teacher::TeacherRepository;
use malaf_drive::resolver::resolve_path;
use malaf_entity::file::{CreateStudentFile, FileCategory, StudentFile};
use malaf_entity::student::Student;
use malaf_entity::teacher::Teacher;

/// One file upload to route into Drive.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original filename as uploaded.
    pub file_name: String,
    /// MIME type of the payload.
    pub mime_type: String,
    /// File contents.
    pub data: Bytes,
    /// Subject folder to route into (Arabic name).
    pub subject_name: String,
    /// Category label; must be one of the fixed Arabic categories.
    pub category: String,
    /// Optional description shown to parents.
    pub description: Option<String>,
}

/// Routes uploads into Drive and keeps the file records.
#[derive(Debug, Clone)]
pub struct FileService {
    drive: Arc<dyn DriveApi>,
    file_repo: Arc<FileRepository>,
    student_repo: Arc<StudentRepository>,
    teacher_repo: Arc<TeacherRepository>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        drive: Arc<dyn DriveApi>,
        file_repo: Arc<FileRepository>,
        student_repo: Arc<StudentRepository>,
        teacher_repo: Arc<TeacherRepository>,
    ) -> Self {
        Self {
            drive,
            file_repo,
            student_repo,
            teacher_repo,
        }
    }

    /// Upload a file for a student and record it.
    pub async fn upload(
        &self,
        teacher_id: i64,
        student_id: i64,
        request: UploadRequest,
    ) -> AppResult<StudentFile> {
        let category = FileCategory::from_label(request.category.trim()).ok_or_else(|| {
            AppError::validation(format!("Unknown file category: {}", request.category))
        })?;
        let subject_name = request.subject_name.trim();
        if subject_name.is_empty() {
            return Err(AppError::validation("Subject is required"));
        }
        if request.file_name.trim().is_empty() {
            return Err(AppError::validation("File name is required"));
        }
        if request.data.is_empty() {
            return Err(AppError::validation("File is empty"));
        }

        let teacher = self.require_teacher(teacher_id).await?;
        let root = teacher
            .drive_folder_id
            .as_deref()
            .ok_or_else(|| AppError::precondition("Google Drive storage not configured"))?;
        let token = teacher
            .access_token
            .as_deref()
            .ok_or_else(|| AppError::precondition("Google Drive not connected"))?;
        let student = self.require_student(teacher_id, student_id).await?;

        let segments = [
            student.folder_name(),
            subject_name.to_string(),
            category.label().to_string(),
        ];
        let folder = resolve_path(self.drive.as_ref(), token, &segments, Some(root)).await?;

        let system_name = format!("{}_{}", Uuid::new_v4(), request.file_name.trim());
        let uploaded = self
            .drive
            .upload_file(
                token,
                &folder,
                &system_name,
                request.data.clone(),
                &request.mime_type,
            )
            .await?;
        self.drive.grant_anyone_reader(token, &uploaded.id).await?;

        let record = self
            .file_repo
            .create(&CreateStudentFile {
                student_civil_id: student.civil_id.clone(),
                subject_name: subject_name.to_string(),
                file_category: category.label().to_string(),
                original_name: request.file_name.trim().to_string(),
                system_name,
                drive_file_id: uploaded.id,
                file_url: uploaded.view_url,
                file_size: Some(request.data.len() as i64),
                file_type: Some(request.mime_type.clone()),
                teacher_id,
                description: request.description,
            })
            .await?;

        info!(
            teacher_id,
            student_id,
            file_id = record.id,
            subject = %record.subject_name,
            category = %record.file_category,
            "File uploaded and routed into Drive"
        );
        Ok(record)
    }

    /// List a student's active file records, newest first.
    pub async fn list(&self, teacher_id: i64, student_id: i64) -> AppResult<Vec<StudentFile>> {
        let student = self.require_student(teacher_id, student_id).await?;
        self.file_repo
            .find_by_student(teacher_id, &student.civil_id)
            .await
    }

    /// Soft-delete a file record and remove the Drive file best-effort.
    pub async fn remove(&self, teacher_id: i64, file_id: i64) -> AppResult<()> {
        let record = self
            .file_repo
            .find_by_id(file_id)
            .await?
            .filter(|f| f.teacher_id == teacher_id)
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))?;

        let teacher = self.require_teacher(teacher_id).await?;
        if let Some(token) = teacher.access_token.as_deref() {
            if let Err(e) = self.drive.delete_file(token, &record.drive_file_id).await {
                warn!(
                    file_id,
                    drive_file_id = %record.drive_file_id,
                    error = %e.message,
                    "Failed to delete Drive file"
                );
            }
        }

        if !self.file_repo.soft_delete(file_id).await? {
            return Err(AppError::not_found(format!("File {file_id} not found")));
        }
        Ok(())
    }

    async fn require_teacher(&self, teacher_id: i64) -> AppResult<Teacher> {
        self.teacher_repo
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Teacher {teacher_id} not found")))
    }

    async fn require_student(&self, teacher_id: i64, student_id: i64) -> AppResult<Student> {
        self.student_repo
            .find_by_id(student_id)
            .await?
            .filter(|s| s.teacher_id == teacher_id)
            .ok_or_else(|| AppError::not_found(format!("Student {student_id} not found")))
    }
}
