//! Single-student folder provisioner.
//!
//! Combines the path resolver with the naming rules to provision one
//! student's folder tree (student folder, then one subfolder per subject)
//! and grants anyone-with-link read access on the student folder so
//! parents can view files without an account. Persistence is the batch
//! orchestrator's responsibility; this component only does the remote
//! work and returns the handle.

use std::sync::Arc;

use tracing::info;

use malaf_core::config::provisioning::ProvisioningConfig;
use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_core::traits::drive::DriveApi;
use malaf_database::repositories::subject::SubjectRepository;
use malaf_drive::resolver::resolve_path;
use malaf_entity::student::Student;
use malaf_entity::teacher::Teacher;

use super::naming::subject_labels;

/// Provisions one student's Drive folder tree.
#[derive(Debug, Clone)]
pub struct StudentProvisioner {
    /// Drive API boundary.
    drive: Arc<dyn DriveApi>,
    /// Subject repository (subject names become subfolder names).
    subject_repo: Arc<SubjectRepository>,
    /// Provisioning settings (default subject label).
    config: ProvisioningConfig,
}

impl StudentProvisioner {
    /// Creates a new provisioner.
    pub fn new(
        drive: Arc<dyn DriveApi>,
        subject_repo: Arc<SubjectRepository>,
        config: ProvisioningConfig,
    ) -> Self {
        Self {
            drive,
            subject_repo,
            config,
        }
    }

    /// Provision the folder tree for one student and return the handle of
    /// the top-level student folder.
    ///
    /// Preconditions: the teacher must have a Drive root folder and an
    /// access token; either missing fails immediately without any remote
    /// call.
    pub async fn provision(&self, teacher: &Teacher, student: &Student) -> AppResult<String> {
        let root = teacher
            .drive_folder_id
            .as_deref()
            .ok_or_else(|| AppError::precondition("Google Drive storage not configured"))?;
        let token = teacher
            .access_token
            .as_deref()
            .ok_or_else(|| AppError::precondition("Google Drive not connected"))?;

        let folder_name = student.folder_name();

        let student_folder = resolve_path(
            self.drive.as_ref(),
            token,
            std::slice::from_ref(&folder_name),
            Some(root),
        )
        .await?;

        let subjects = self.subject_repo.find_for_student(student.id).await?;
        for label in subject_labels(&subjects, &self.config.default_subject_label) {
            resolve_path(
                self.drive.as_ref(),
                token,
                &[folder_name.clone(), label],
                Some(root),
            )
            .await?;
        }

        self.drive.grant_anyone_reader(token, &student_folder).await?;

        info!(
            student_id = student.id,
            folder_id = %student_folder,
            "Provisioned student folder tree"
        );

        Ok(student_folder)
    }
}
