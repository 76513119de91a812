//! Student roster service: create, update, list, and soft-delete
//! students, keeping their subject associations and remote folders in
//! step.

use std::sync::Arc;

use tracing::warn;

use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_core::traits::drive::DriveApi;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::subject::SubjectRepository;
use malaf_database::repositories::teacher::TeacherRepository;
use malaf_entity::student::{CreateStudent, Student, UpdateStudent};
use malaf_entity::subject::Subject;

/// Student roster operations.
#[derive(Debug, Clone)]
pub struct StudentService {
    student_repo: Arc<StudentRepository>,
    subject_repo: Arc<SubjectRepository>,
    teacher_repo: Arc<TeacherRepository>,
    drive: Arc<dyn DriveApi>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(
        student_repo: Arc<StudentRepository>,
        subject_repo: Arc<SubjectRepository>,
        teacher_repo: Arc<TeacherRepository>,
        drive: Arc<dyn DriveApi>,
    ) -> Self {
        Self {
            student_repo,
            subject_repo,
            teacher_repo,
            drive,
        }
    }

    /// List a teacher's active students.
    pub async fn list(&self, teacher_id: i64) -> AppResult<Vec<Student>> {
        self.student_repo.find_by_teacher(teacher_id).await
    }

    /// Fetch one student by ID.
    pub async fn get(&self, id: i64) -> AppResult<Student> {
        self.student_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student {id} not found")))
    }

    /// Subjects associated with a student.
    pub async fn subjects(&self, student_id: i64) -> AppResult<Vec<Subject>> {
        self.subject_repo.find_for_student(student_id).await
    }

    /// Create a student and associate subjects by name. Subject names not
    /// yet in the catalog are added to it.
    pub async fn create(
        &self,
        data: &CreateStudent,
        subject_names: &[String],
    ) -> AppResult<Student> {
        let civil_id = data.civil_id.trim();
        if civil_id.is_empty() {
            return Err(AppError::validation("Civil ID is required"));
        }
        if data.student_name.trim().is_empty() {
            return Err(AppError::validation("Student name is required"));
        }
        if self
            .student_repo
            .find_by_civil_id(data.teacher_id, civil_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "A student with civil ID {civil_id} already exists"
            )));
        }

        let student = self.student_repo.create(data).await?;
        let subject_ids = self.resolve_subject_ids(subject_names).await?;
        if !subject_ids.is_empty() {
            self.subject_repo
                .set_student_subjects(student.id, &subject_ids)
                .await?;
        }
        Ok(student)
    }

    /// Update a student's fields and, when given, the subject list.
    pub async fn update(
        &self,
        id: i64,
        data: &UpdateStudent,
        subject_names: Option<&[String]>,
    ) -> AppResult<Student> {
        self.get(id).await?;
        let student = self.student_repo.update(id, data).await?;
        if let Some(names) = subject_names {
            let subject_ids = self.resolve_subject_ids(names).await?;
            self.subject_repo
                .set_student_subjects(id, &subject_ids)
                .await?;
        }
        Ok(student)
    }

    /// Soft-delete one student. The Drive folder, if provisioned, is
    /// removed best-effort; a remote failure never blocks the local
    /// delete.
    pub async fn remove(&self, teacher_id: i64, student_id: i64) -> AppResult<()> {
        let student = self.get(student_id).await?;
        if student.teacher_id != teacher_id {
            return Err(AppError::not_found(format!(
                "Student {student_id} not found"
            )));
        }

        self.delete_remote_folder(teacher_id, &student).await;
        if !self.student_repo.soft_delete(student_id).await? {
            return Err(AppError::not_found(format!(
                "Student {student_id} not found"
            )));
        }
        Ok(())
    }

    /// Soft-delete all of a teacher's students, removing provisioned
    /// Drive folders best-effort. Returns the number of deleted rows.
    pub async fn remove_all(&self, teacher_id: i64) -> AppResult<u64> {
        let students = self.student_repo.find_by_teacher(teacher_id).await?;
        for student in &students {
            self.delete_remote_folder(teacher_id, student).await;
        }
        self.student_repo.soft_delete_by_teacher(teacher_id).await
    }

    async fn resolve_subject_ids(&self, names: &[String]) -> AppResult<Vec<i64>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            let subject = match self.subject_repo.find_by_name(name).await? {
                Some(existing) => existing,
                None => self.subject_repo.create(name).await?,
            };
            ids.push(subject.id);
        }
        Ok(ids)
    }

    async fn delete_remote_folder(&self, teacher_id: i64, student: &Student) {
        let Some(folder_id) = student.drive_folder_id.as_deref() else {
            return;
        };
        let token = match self.teacher_repo.find_by_id(teacher_id).await {
            Ok(Some(teacher)) => teacher.access_token,
            _ => None,
        };
        let Some(token) = token else {
            return;
        };
        if let Err(e) = self.drive.delete_file(&token, folder_id).await {
            warn!(
                student_id = student.id,
                folder_id,
                error = %e.message,
                "Failed to delete student Drive folder"
            );
        }
    }
}
