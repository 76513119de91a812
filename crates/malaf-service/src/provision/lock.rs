//! Per-teacher batch lock.
//!
//! The resolver's list-then-create pattern is not atomic, so two batch
//! runs racing the same teacher's paths could both create the same
//! folder. An in-process advisory lock keyed by teacher ID serializes
//! batch runs; overlapping runs are rejected rather than queued. This is
//! sufficient for a single-instance deployment.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Advisory lock over batch provisioning runs, keyed by teacher ID.
#[derive(Debug, Clone, Default)]
pub struct BatchLock {
    running: Arc<DashMap<i64, ()>>,
}

/// Guard releasing the teacher's slot on drop.
#[derive(Debug)]
pub struct BatchGuard {
    running: Arc<DashMap<i64, ()>>,
    teacher_id: i64,
}

impl BatchLock {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to claim the batch slot for a teacher. Returns `None` when a
    /// run is already in progress.
    pub fn try_acquire(&self, teacher_id: i64) -> Option<BatchGuard> {
        match self.running.entry(teacher_id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(());
                Some(BatchGuard {
                    running: Arc::clone(&self.running),
                    teacher_id,
                })
            }
        }
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        self.running.remove(&self.teacher_id);
    }
}
