//! Observations handed to sequencing policies.
//!
//! Three aligned views: per job, per machine, and the static setup matrix.
//! [`Observation::to_matrices`] flattens them into the numeric tables a
//! learning agent consumes:
//!
//! ```text
//! jobs:     [arrival, p_0 .. p_{M-1}, due, status]   status: 1 waiting, 0 in service, -1 done
//! machines: [available_at, last_completed, in_service, since_setup]   ids: -1 for none
//! setup:    N×N, row = predecessor
//! ```

use std::sync::Arc;

use upms_core::{JobId, MachineId, SetupMatrix, SimTime, job_code};

use crate::JobStatus;

#[derive(Clone, Debug, PartialEq)]
pub struct JobView {
    pub id:           JobId,
    pub arrival_time: f64,
    pub processing:   Vec<f64>,
    pub due_date:     f64,
    pub status:       JobStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MachineView {
    pub id:             MachineId,
    pub available_at:   f64,
    pub last_completed: Option<JobId>,
    pub in_service:     Option<JobId>,
    /// Time since the machine's last setup finished; 0 if it never set up.
    pub since_setup:    f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub now:      SimTime,
    pub jobs:     Vec<JobView>,
    pub machines: Vec<MachineView>,
    pub setup:    Arc<SetupMatrix>,
    /// Ids in the job queue, in insertion order.
    pub queued:   Vec<JobId>,
}

/// Numeric form of an [`Observation`].
#[derive(Clone, Debug, PartialEq)]
pub struct Matrices {
    pub jobs:     Vec<Vec<f64>>,
    pub machines: Vec<Vec<f64>>,
    pub setup:    Vec<Vec<f64>>,
}

impl Observation {
    pub fn to_matrices(&self) -> Matrices {
        let jobs = self
            .jobs
            .iter()
            .map(|j| {
                let mut row = Vec::with_capacity(j.processing.len() + 3);
                row.push(j.arrival_time);
                row.extend_from_slice(&j.processing);
                row.push(j.due_date);
                row.push(j.status.code());
                row
            })
            .collect();

        let machines = self
            .machines
            .iter()
            .map(|m| {
                vec![
                    m.available_at,
                    job_code(m.last_completed),
                    job_code(m.in_service),
                    m.since_setup,
                ]
            })
            .collect();

        Matrices {
            jobs,
            machines,
            setup: self.setup.rows(),
        }
    }
}
