//! Batch provisioning report types.
//!
//! Each chunk of a batch run produces an immutable list of
//! [`ProvisionOutcome`] values; the orchestrator reduces them into a
//! [`BatchReport`] after the chunk settles. No counters are shared with
//! the concurrent workers.

use serde::{Deserialize, Serialize};

/// The outcome of provisioning a single student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProvisionOutcome {
    /// The folder tree was created; carries the top-level folder handle.
    Created {
        /// Student primary key.
        student_id: i64,
        /// Handle of the student's Drive folder.
        folder_id: String,
    },
    /// Provisioning failed; persisted state is left unchanged so the
    /// student is retried on the next batch run.
    Failed {
        /// Student primary key.
        student_id: i64,
        /// Student display name for the operator-facing report.
        student_name: String,
        /// External error text, preserved verbatim.
        error: String,
    },
    /// The student was bypassed mid-run (flag already set by a concurrent
    /// duplicate in the same batch). Already-provisioned students are
    /// filtered out before the batch is even submitted.
    Skipped {
        /// Student primary key.
        student_id: i64,
    },
}

/// Aggregate report for one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Students whose folder tree was created and persisted.
    pub created: u32,
    /// Students whose provisioning failed (eligible for retry).
    pub failed: u32,
    /// Students bypassed mid-run.
    pub skipped: u32,
    /// Total students submitted to the batch.
    pub total: u32,
    /// Human-readable per-student error messages, in submission order.
    pub errors: Vec<String>,
}

impl BatchReport {
    /// Whether every submitted student was provisioned.
    pub fn is_complete_success(&self) -> bool {
        self.failed == 0
    }

    /// Fold one outcome into the report.
    pub fn absorb(&mut self, outcome: &ProvisionOutcome) {
        match outcome {
            ProvisionOutcome::Created { .. } => self.created += 1,
            ProvisionOutcome::Failed {
                student_name,
                error,
                ..
            } => {
                self.failed += 1;
                self.errors.push(format!("{student_name}: {error}"));
            }
            ProvisionOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}
