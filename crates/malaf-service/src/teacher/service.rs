//! Teacher service: profile lookup, Drive root configuration, and
//! dashboard statistics.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_database::repositories::file::FileRepository;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::subject::SubjectRepository;
use malaf_database::repositories::teacher::TeacherRepository;
use malaf_entity::teacher::{Teacher, UpdateTeacher};

/// Dashboard totals for one teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherStats {
    /// Active students.
    pub students: u64,
    /// Active uploaded files.
    pub files: u64,
    /// Subjects the teacher teaches.
    pub subjects: u64,
}

/// Teacher-facing operations.
#[derive(Debug, Clone)]
pub struct TeacherService {
    teacher_repo: Arc<TeacherRepository>,
    student_repo: Arc<StudentRepository>,
    file_repo: Arc<FileRepository>,
    subject_repo: Arc<SubjectRepository>,
}

impl TeacherService {
    /// Creates a new teacher service.
    pub fn new(
        teacher_repo: Arc<TeacherRepository>,
        student_repo: Arc<StudentRepository>,
        file_repo: Arc<FileRepository>,
        subject_repo: Arc<SubjectRepository>,
    ) -> Self {
        Self {
            teacher_repo,
            student_repo,
            file_repo,
            subject_repo,
        }
    }

    /// Fetch a teacher by ID.
    pub async fn get(&self, id: i64) -> AppResult<Teacher> {
        self.teacher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Teacher {id} not found")))
    }

    /// Update a teacher's profile and, when given, the taught subjects.
    pub async fn update_profile(
        &self,
        id: i64,
        school_name: Option<String>,
        subject_names: Option<Vec<String>>,
    ) -> AppResult<Teacher> {
        let teacher = self
            .teacher_repo
            .update(
                id,
                &UpdateTeacher {
                    school_name,
                    drive_folder_id: None,
                    access_token: None,
                },
            )
            .await?;

        if let Some(names) = subject_names {
            let mut subject_ids = Vec::with_capacity(names.len());
            for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
                let subject = match self.subject_repo.find_by_name(name).await? {
                    Some(existing) => existing,
                    None => self.subject_repo.create(name).await?,
                };
                subject_ids.push(subject.id);
            }
            self.subject_repo.set_teacher_subjects(id, &subject_ids).await?;
        }

        Ok(teacher)
    }

    /// Set or replace the teacher's Drive root folder. Accepts either a
    /// bare folder handle or a full Drive folder URL.
    pub async fn set_drive_folder(&self, id: i64, input: &str) -> AppResult<Teacher> {
        let folder_id = extract_folder_id(input)
            .ok_or_else(|| AppError::validation("A Drive folder link or ID is required"))?;

        let teacher = self.teacher_repo.set_drive_folder(id, &folder_id).await?;
        info!(teacher_id = id, folder_id = %folder_id, "Drive root folder configured");
        Ok(teacher)
    }

    /// Replace the teacher's parent-access link code with a fresh one.
    /// The old code stops working immediately.
    pub async fn regenerate_link_code(&self, id: i64) -> AppResult<Teacher> {
        self.get(id).await?;
        let code = generate_link_code();
        let teacher = self.teacher_repo.set_link_code(id, &code).await?;
        info!(teacher_id = id, "Parent access link code regenerated");
        Ok(teacher)
    }

    /// Dashboard totals for one teacher.
    pub async fn stats(&self, id: i64) -> AppResult<TeacherStats> {
        // Fail with NotFound before counting against a missing teacher.
        self.get(id).await?;
        Ok(TeacherStats {
            students: self.student_repo.count_by_teacher(id).await?,
            files: self.file_repo.count_by_teacher(id).await?,
            subjects: self.subject_repo.find_for_teacher(id).await?.len() as u64,
        })
    }
}

/// A 6-character uppercase alphanumeric parent-access code. Ambiguous
/// characters (0/O, 1/I) are excluded.
fn generate_link_code() -> String {
    use rand::Rng;

    const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Extract the folder handle from a Drive folder URL, or pass a bare
/// handle through. Returns `None` for blank input.
fn extract_folder_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match input.split_once("/folders/") {
        Some((_, rest)) => {
            let id = rest
                .split(['/', '?', '#'])
                .next()
                .unwrap_or("");
            if id.is_empty() {
                None
            } else {
                Some(id.to_string())
            }
        }
        None => Some(input.to_string()),
    }
}
