//! `World` — the shared simulation context.
//!
//! One explicit structure holds everything entities share: job statuses, the
//! next-arrival time, the throughput counter, the terminal flag, makespan,
//! the per-step reward accumulator, the two notifiers and the append-only
//! records.  The controller owns it; components receive `&mut World`.

use upms_core::{JobId, SimTime};
use upms_engine::{Engine, Notifier};

use crate::{ScheduleRecord, SimEvent, TraceEvent};

/// Lifecycle of a job as exposed in observations.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum JobStatus {
    /// Not yet arrived, or queued, or being set up for.
    #[default]
    Waiting,
    /// On a machine, processing.
    InService,
    /// Completed.
    Done,
}

impl JobStatus {
    /// Numeric encoding used in observation tables.
    pub fn code(self) -> f64 {
        match self {
            JobStatus::Waiting   => 1.0,
            JobStatus::InService => 0.0,
            JobStatus::Done      => -1.0,
        }
    }
}

#[derive(Debug)]
pub struct World {
    /// Indexed by `JobId`.
    pub job_status:   Vec<JobStatus>,
    /// Next distinct arrival timestamp; `SimTime::INFINITY` once exhausted.
    pub next_arrival: SimTime,
    /// Completed jobs.  Never decreases.
    pub throughput:   usize,
    pub terminal:     bool,
    pub makespan:     Option<SimTime>,
    /// Sum of `upper bound - actual time` over assignments since the last
    /// `step`.  Kept for inspection; not part of the returned reward.
    pub step_reward:  f64,

    /// Raised when an external dispatch choice is needed.  Re-arms on fire.
    pub decision:     Notifier,
    /// Raised once, when the last job completes.
    pub finished:     Notifier,

    pub trace:        Vec<TraceEvent>,
    pub schedule:     Vec<ScheduleRecord>,
    record_trace:     bool,
}

impl World {
    pub fn new(
        job_count:     usize,
        first_arrival: SimTime,
        record_trace:  bool,
        engine:        &mut Engine<SimEvent>,
    ) -> Self {
        Self {
            job_status:   vec![JobStatus::Waiting; job_count],
            next_arrival: first_arrival,
            throughput:   0,
            terminal:     false,
            makespan:     None,
            step_reward:  0.0,
            decision:     Notifier::rearming(engine),
            finished:     Notifier::one_shot(engine),
            trace:        Vec::new(),
            schedule:     Vec::new(),
            record_trace,
        }
    }

    pub fn job_count(&self) -> usize {
        self.job_status.len()
    }

    pub fn set_status(&mut self, job: JobId, status: JobStatus) {
        self.job_status[job.index()] = status;
    }

    pub fn status(&self, job: JobId) -> JobStatus {
        self.job_status[job.index()]
    }

    pub fn record_trace(&mut self, event: TraceEvent) {
        if self.record_trace {
            self.trace.push(event);
        }
    }

    pub fn record_interval(&mut self, record: ScheduleRecord) {
        self.schedule.push(record);
    }
}
