//! Job records.
//!
//! [`JobSpec`] is one row of the input table.  [`Job`] is the runtime record
//! the arrival source builds when the job's arrival time is reached; it
//! additionally carries the job's column of the setup matrix so rules and
//! machines can look up "setup after predecessor `p`" without the matrix.

use crate::{JobId, MachineId, SimTime};

/// One row of the input job table.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub arrival_time: f64,
    /// Processing time on each machine, indexed by `MachineId`.
    pub processing:   Vec<f64>,
    pub due_date:     f64,
}

impl JobSpec {
    pub fn new(arrival_time: f64, processing: Vec<f64>, due_date: f64) -> Self {
        Self { arrival_time, processing, due_date }
    }
}

/// An arrived job.  Immutable after construction.
///
/// Ownership follows the job through the system: the arrival source creates
/// it, the queue holds it until a machine takes it, the machine holds it while
/// setting up and processing, and the sink drops it on completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id:           JobId,
    pub arrival_time: SimTime,
    pub processing:   Vec<f64>,
    pub due_date:     f64,
    /// Setup time incurred when this job follows job `p`, indexed by `p`.
    /// The self-entry is zero.
    pub setup:        Vec<f64>,
}

impl Job {
    /// Processing time of this job on `machine`.
    #[inline]
    pub fn processing_on(&self, machine: MachineId) -> f64 {
        self.processing[machine.index()]
    }

    /// Setup time when this job is loaded right after `predecessor`.
    #[inline]
    pub fn setup_after(&self, predecessor: JobId) -> f64 {
        self.setup[predecessor.index()]
    }

    /// Largest processing time across all machines (0 for an empty vector).
    pub fn max_processing(&self) -> f64 {
        self.processing.iter().copied().fold(0.0, f64::max)
    }

    /// Largest setup time across all possible predecessors.
    pub fn max_setup(&self) -> f64 {
        self.setup.iter().copied().fold(0.0, f64::max)
    }
}
