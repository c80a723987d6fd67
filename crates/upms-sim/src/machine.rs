//! `Machine` — the per-resource setup/process state machine.
//!
//! ```text
//!            assign (has history)          setup elapsed
//!   Idle ───────────────────────▶ SettingUp ─────────────▶ Processing
//!    ▲  └──────────────────────────────────────────────────▶   │
//!    │        assign (no history): no setup interval            │
//!    └──────────────────────────────────────────────────────────┘
//!                          processing elapsed
//! ```
//!
//! A machine owns its loaded job from assignment until completion, then
//! hands it to the sink.  Operations are never cancelled.

use tracing::{debug, warn};
use upms_core::{Job, JobId, MachineId, SimTime};
use upms_engine::Engine;

use crate::{JobStatus, ScheduleRecord, SimEvent, TraceEvent, TraceKind, World};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum MachineStatus {
    #[default]
    Idle,
    SettingUp,
    Processing,
}

#[derive(Debug)]
pub struct Machine {
    pub id:             MachineId,
    pub status:         MachineStatus,
    /// End of the current or most recent processing interval.  Setups
    /// leave it untouched.
    pub available_at:   SimTime,
    pub last_completed: Option<JobId>,
    /// Completion time of the most recent setup interval.
    pub last_setup_end: Option<SimTime>,
    loaded:             Option<Job>,
}

impl Machine {
    pub fn new(id: MachineId) -> Self {
        Self {
            id,
            status:         MachineStatus::Idle,
            available_at:   SimTime::ZERO,
            last_completed: None,
            last_setup_end: None,
            loaded:         None,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == MachineStatus::Idle
    }

    /// Job currently being processed.  `None` while idle or setting up.
    pub fn in_service(&self) -> Option<JobId> {
        match self.status {
            MachineStatus::Processing => self.loaded.as_ref().map(|j| j.id),
            _ => None,
        }
    }

    /// Job held by the machine, whether setting up for it or processing it.
    pub fn loaded(&self) -> Option<&Job> {
        self.loaded.as_ref()
    }

    /// Setup time `job` would incur on this machine right now.
    pub fn setup_for(&self, job: &Job) -> Option<f64> {
        self.last_completed.map(|prev| job.setup_after(prev))
    }

    /// Load `job` and start its setup (or its processing when the machine
    /// has never completed a job).
    pub fn assign(&mut self, job: Job, engine: &mut Engine<SimEvent>, world: &mut World) {
        debug_assert!(self.is_idle(), "{} assigned while {:?}", self.id, self.status);
        let now = engine.now();

        world.step_reward += self.assignment_gain(&job);

        match self.setup_for(&job) {
            Some(setup) => {
                world.record_interval(ScheduleRecord {
                    machine:  self.id,
                    job:      None,
                    start:    now,
                    duration: setup,
                    due_date: None,
                });
                world.record_trace(TraceEvent {
                    time:    now,
                    kind:    TraceKind::Setup,
                    job:     job.id,
                    machine: Some(self.id),
                });
                debug!(now = %now, machine = self.id.0, job = job.id.0, setup, "setup start");
                self.status = MachineStatus::SettingUp;
                self.loaded = Some(job);
                engine.advance(setup, SimEvent::SetupDone(self.id));
            }
            None => {
                self.loaded = Some(job);
                self.start_processing(engine, world);
            }
        }
    }

    /// Resume after the setup interval.
    pub fn finish_setup(&mut self, engine: &mut Engine<SimEvent>, world: &mut World) {
        debug_assert_eq!(self.status, MachineStatus::SettingUp);
        self.last_setup_end = Some(engine.now());
        self.start_processing(engine, world);
    }

    /// Resume after processing.  Returns the finished job for the sink.
    pub fn finish_processing(&mut self, engine: &mut Engine<SimEvent>, world: &mut World) -> Option<Job> {
        let now = engine.now();
        let Some(job) = self.loaded.take() else {
            warn!(machine = self.id.0, "processing finished with no job loaded");
            return None;
        };
        world.record_trace(TraceEvent {
            time:    now,
            kind:    TraceKind::Finish,
            job:     job.id,
            machine: Some(self.id),
        });
        debug!(now = %now, machine = self.id.0, job = job.id.0, "process finish");

        self.status = MachineStatus::Idle;
        self.last_completed = Some(job.id);
        self.available_at = now;
        Some(job)
    }

    fn start_processing(&mut self, engine: &mut Engine<SimEvent>, world: &mut World) {
        let now = engine.now();
        let Some(job) = self.loaded.as_ref() else {
            warn!(machine = self.id.0, "processing requested with no job loaded");
            return;
        };
        let p = job.processing_on(self.id);

        world.record_interval(ScheduleRecord {
            machine:  self.id,
            job:      Some(job.id),
            start:    now,
            duration: p,
            due_date: Some(job.due_date),
        });
        world.record_trace(TraceEvent {
            time:    now,
            kind:    TraceKind::Start,
            job:     job.id,
            machine: Some(self.id),
        });
        world.set_status(job.id, JobStatus::InService);
        debug!(now = %now, machine = self.id.0, job = job.id.0, processing = p, "process start");

        self.status = MachineStatus::Processing;
        self.available_at = now.after(p);
        engine.advance(p, SimEvent::ProcessDone(self.id));
    }

    /// `upper bound - actual` for loading `job` here: how much worse this
    /// assignment could have been.
    ///
    /// With history the bound is the job's largest setup plus its largest
    /// processing time; without history no setup is possible, so the bound
    /// is the largest processing time alone.
    pub fn assignment_gain(&self, job: &Job) -> f64 {
        let p = job.processing_on(self.id);
        match self.setup_for(job) {
            Some(setup) => job.max_setup() + job.max_processing() - (setup + p),
            None => job.max_processing() - p,
        }
    }
}
