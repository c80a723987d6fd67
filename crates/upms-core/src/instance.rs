//! Problem instances: the job table plus the sequence-dependent setup matrix.
//!
//! `Instance::new` performs no validation; the simulator trusts its input.
//! Loading through [`crate::loader`] validates ordering and shapes first.

use crate::{Job, JobId, JobSpec, SimTime};

// ── SetupMatrix ───────────────────────────────────────────────────────────────

/// Dense N×N matrix; entry `(from, to)` is the setup incurred when job `to`
/// follows job `from` on the same machine.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupMatrix {
    n:    usize,
    data: Vec<f64>,
}

impl SetupMatrix {
    /// Build from row-major rows.  Rows of unequal length are the caller's
    /// problem; use [`SetupMatrix::is_square`] to check.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let data = rows.into_iter().flatten().collect();
        Self { n, data }
    }

    /// A matrix of zeros (no changeover cost anywhere).
    pub fn zeros(n: usize) -> Self {
        Self { n, data: vec![0.0; n * n] }
    }

    /// Number of jobs the matrix covers.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_square(&self) -> bool {
        self.data.len() == self.n * self.n
    }

    #[inline]
    pub fn get(&self, from: JobId, to: JobId) -> f64 {
        self.data[from.index() * self.n + to.index()]
    }

    /// Setup times *into* job `to`, indexed by predecessor.
    pub fn column(&self, to: JobId) -> Vec<f64> {
        (0..self.n).map(|from| self.data[from * self.n + to.index()]).collect()
    }

    /// Row-major view, one `Vec` per predecessor.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n.max(1)).map(<[f64]>::to_vec).collect()
    }
}

// ── Instance ──────────────────────────────────────────────────────────────────

/// A complete scheduling instance.
///
/// Jobs must be sorted ascending by arrival time, ties in input
/// order; job `i` in `jobs` gets `JobId(i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub machine_count: usize,
    pub jobs:          Vec<JobSpec>,
    pub setup:         SetupMatrix,
}

impl Instance {
    pub fn new(machine_count: usize, jobs: Vec<JobSpec>, setup: SetupMatrix) -> Self {
        Self { machine_count, jobs, setup }
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Materialise the runtime record for job `id`.
    pub fn build_job(&self, id: JobId) -> Job {
        let spec = &self.jobs[id.index()];
        Job {
            id,
            arrival_time: SimTime(spec.arrival_time),
            processing:   spec.processing.clone(),
            due_date:     spec.due_date,
            setup:        self.setup.column(id),
        }
    }

    /// Arrival time of job `i`, or `SimTime::INFINITY` past the end.
    pub fn arrival_at(&self, i: usize) -> SimTime {
        self.jobs
            .get(i)
            .map_or(SimTime::INFINITY, |j| SimTime(j.arrival_time))
    }
}
