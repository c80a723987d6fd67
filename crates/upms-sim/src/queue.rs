//! `JobQueue` — arrived, unassigned jobs in insertion order.
//!
//! The queue imposes no policy; FIFO/LIFO and tie-breaks rely on insertion
//! order being preserved.  A job leaves exactly once, by value, when a
//! machine takes it.

use upms_core::{Job, JobId};

#[derive(Debug, Default)]
pub struct JobQueue {
    buffer: Vec<Job>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: Job) {
        debug_assert!(
            !self.contains(job.id),
            "job {} enqueued twice",
            job.id
        );
        self.buffer.push(job);
    }

    /// Remove the job with identity `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: JobId) -> Option<Job> {
        let pos = self.buffer.iter().position(|j| j.id == id)?;
        Some(self.buffer.remove(pos))
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.buffer.iter().any(|j| j.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Read-only view for rule evaluation.
    pub fn jobs(&self) -> &[Job] {
        &self.buffer
    }

    pub fn ids(&self) -> impl Iterator<Item = JobId> + '_ {
        self.buffer.iter().map(|j| j.id)
    }
}
