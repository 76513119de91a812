//! Batch provisioning orchestrator.
//!
//! Splits a teacher's unprovisioned students into fixed-size chunks,
//! provisions each chunk concurrently, waits a fixed pause between
//! chunks, and reduces the per-chunk outcomes into a [`BatchReport`].
//! Chunks are strictly sequential: chunk N+1 never starts before chunk N
//! fully settles. Workers return immutable outcomes; only the awaiting
//! orchestrator touches the counters and the database.
//!
//! Successes are sticky (the persisted flag is never cleared by this
//! subsystem); failures are not (persisted state is left unchanged so the
//! student reappears in the next run's worklist).

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{info, warn};

use malaf_core::config::provisioning::ProvisioningConfig;
use malaf_core::error::AppError;
use malaf_core::result::AppResult;
use malaf_database::repositories::student::StudentRepository;
use malaf_database::repositories::teacher::TeacherRepository;
use malaf_entity::provision::{BatchReport, ProvisionOutcome};
use malaf_entity::student::Student;
use malaf_entity::teacher::Teacher;

use super::lock::BatchLock;
use super::provisioner::StudentProvisioner;

/// Orchestrates batch folder provisioning for a teacher's students.
#[derive(Debug, Clone)]
pub struct BatchProvisionService {
    /// Single-student provisioner.
    provisioner: StudentProvisioner,
    /// Student repository (worklist and provisioning state).
    student_repo: Arc<StudentRepository>,
    /// Teacher repository.
    teacher_repo: Arc<TeacherRepository>,
    /// Per-teacher batch lock.
    lock: BatchLock,
    /// Chunking configuration.
    config: ProvisioningConfig,
}

impl BatchProvisionService {
    /// Creates a new batch provisioning service.
    pub fn new(
        provisioner: StudentProvisioner,
        student_repo: Arc<StudentRepository>,
        teacher_repo: Arc<TeacherRepository>,
        lock: BatchLock,
        config: ProvisioningConfig,
    ) -> Self {
        Self {
            provisioner,
            student_repo,
            teacher_repo,
            lock,
            config,
        }
    }

    /// Provision folder trees for every active student of the teacher
    /// whose folder has not been created yet.
    ///
    /// The whole batch fails up front when the teacher is missing, has no
    /// Drive root configured, or another run is already in progress for
    /// the same teacher. Per-student failures never abort the batch.
    pub async fn provision_all(&self, teacher_id: i64) -> AppResult<BatchReport> {
        let teacher = self.require_teacher(teacher_id).await?;
        if teacher.drive_folder_id.is_none() {
            return Err(AppError::precondition("Google Drive storage not configured"));
        }

        let _guard = self.lock.try_acquire(teacher_id).ok_or_else(|| {
            AppError::conflict("A folder provisioning run is already in progress for this teacher")
        })?;

        let students = self.student_repo.find_needing_folders(teacher_id).await?;
        let mut report = BatchReport {
            total: students.len() as u32,
            ..Default::default()
        };

        info!(
            teacher_id,
            total = students.len(),
            chunk_size = self.config.chunk_size,
            "Starting batch folder provisioning"
        );

        let chunk_size = self.config.chunk_size.max(1);
        for (index, chunk) in students.chunks(chunk_size).enumerate() {
            if index > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.inter_chunk_delay_ms)).await;
            }

            let outcomes = join_all(
                chunk
                    .iter()
                    .map(|student| self.provision_one(&teacher, student)),
            )
            .await;

            for outcome in outcomes {
                let outcome = self.persist_outcome(outcome).await;
                report.absorb(&outcome);
            }
        }

        info!(
            teacher_id,
            created = report.created,
            failed = report.failed,
            skipped = report.skipped,
            "Batch folder provisioning finished"
        );

        Ok(report)
    }

    /// Provision one student by ID, persisting the result. Used by the
    /// single-student endpoint; shares the teacher's batch lock.
    pub async fn provision_single(&self, student_id: i64) -> AppResult<Student> {
        let student = self
            .student_repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student {student_id} not found")))?;

        if student.folder_created {
            return Ok(student);
        }

        let teacher = self.require_teacher(student.teacher_id).await?;
        let _guard = self.lock.try_acquire(teacher.id).ok_or_else(|| {
            AppError::conflict("A folder provisioning run is already in progress for this teacher")
        })?;

        let folder_id = self.provisioner.provision(&teacher, &student).await?;
        self.student_repo
            .mark_folder_created(student.id, &folder_id)
            .await?;

        self.student_repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student {student_id} not found")))
    }

    async fn require_teacher(&self, teacher_id: i64) -> AppResult<Teacher> {
        self.teacher_repo
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Teacher {teacher_id} not found")))
    }

    /// One concurrent worker. Returns an immutable outcome; no shared
    /// state is touched here.
    async fn provision_one(&self, teacher: &Teacher, student: &Student) -> ProvisionOutcome {
        if student.folder_created {
            return ProvisionOutcome::Skipped {
                student_id: student.id,
            };
        }

        match self.provisioner.provision(teacher, student).await {
            Ok(folder_id) => ProvisionOutcome::Created {
                student_id: student.id,
                folder_id,
            },
            Err(e) => {
                warn!(
                    student_id = student.id,
                    error = %e.message,
                    "Student folder provisioning failed"
                );
                ProvisionOutcome::Failed {
                    student_id: student.id,
                    student_name: student.student_name.clone(),
                    error: e.message,
                }
            }
        }
    }

    /// Persist a successful outcome. A persistence error downgrades the
    /// outcome to a failure so the student stays in the worklist.
    async fn persist_outcome(&self, outcome: ProvisionOutcome) -> ProvisionOutcome {
        match outcome {
            ProvisionOutcome::Created {
                student_id,
                folder_id,
            } => match self
                .student_repo
                .mark_folder_created(student_id, &folder_id)
                .await
            {
                Ok(()) => ProvisionOutcome::Created {
                    student_id,
                    folder_id,
                },
                Err(e) => ProvisionOutcome::Failed {
                    student_id,
                    student_name: format!("#{student_id}"),
                    error: e.message,
                },
            },
            other => other,
        }
    }
}
