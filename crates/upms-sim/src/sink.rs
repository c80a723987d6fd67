//! `Sink` — counts completions and detects the end of the run.

use tracing::info;
use upms_core::Job;
use upms_engine::Engine;

use crate::{JobStatus, SimEvent, World};

#[derive(Debug)]
pub struct Sink {
    /// Completions that end the run (N).
    target: usize,
}

impl Sink {
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Retire `job`.  On the last completion, marks the world terminal,
    /// records the makespan and fires both the decision and terminal signals
    /// so a pending step unblocks.
    pub fn finish(&self, job: Job, engine: &mut Engine<SimEvent>, world: &mut World) {
        debug_assert_ne!(world.status(job.id), JobStatus::Done, "job {} finished twice", job.id);
        world.set_status(job.id, JobStatus::Done);
        world.throughput += 1;
        drop(job);

        if world.throughput == self.target {
            let now = engine.now();
            world.terminal = true;
            world.makespan = Some(now);
            world.decision.fire(engine);
            world.finished.fire(engine);
            info!(makespan = %now, jobs = self.target, "all jobs complete");
        }
    }
}
