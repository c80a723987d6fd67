//! `Coordinator` — matches idle machines with queued jobs.
//!
//! Two entry points:
//!
//! - [`check_dispatch`][Coordinator::check_dispatch] runs after every arrival
//!   batch and after every completion that does not coincide with an
//!   arrival.  A lone queued job is assigned without consulting anyone; with
//!   two or more candidates the decision signal is raised once and the scan
//!   stops.
//! - [`dispatch`][Coordinator::dispatch] applies an externally chosen rule to
//!   every idle machine, in id order, while jobs remain.

use tracing::debug;
use upms_core::{Job, JobId};
use upms_dispatch::{DispatchRule, RuleContext};
use upms_engine::Engine;

use crate::{JobQueue, Machine, SimError, SimEvent, SimResult, World};

#[derive(Debug, Default)]
pub struct Coordinator;

impl Coordinator {
    pub fn new() -> Self {
        Self
    }

    /// Look for idle-machine / non-empty-queue pairs.  Returns `true` if a
    /// decision point was raised.
    pub fn check_dispatch(
        &self,
        engine:   &mut Engine<SimEvent>,
        world:    &mut World,
        queue:    &mut JobQueue,
        machines: &mut [Machine],
    ) -> bool {
        for machine in machines.iter_mut() {
            if !machine.is_idle() || queue.is_empty() {
                continue;
            }
            if queue.len() == 1 {
                let Some(job) = take_only(queue) else { continue };
                debug!(now = %engine.now(), machine = machine.id.0, job = job.id.0, "auto-assign");
                machine.assign(job, engine, world);
            } else {
                debug!(now = %engine.now(), machine = machine.id.0, candidates = queue.len(), "decision point");
                world.decision.fire(engine);
                return true;
            }
        }
        false
    }

    /// Apply `rule` to every idle machine that has work available.  Returns
    /// the number of jobs assigned; zero is a normal outcome.
    pub fn dispatch(
        &self,
        rule:     DispatchRule,
        engine:   &mut Engine<SimEvent>,
        world:    &mut World,
        queue:    &mut JobQueue,
        machines: &mut [Machine],
    ) -> SimResult<usize> {
        let mut assigned = 0;
        for machine in machines.iter_mut() {
            if !machine.is_idle() || queue.is_empty() {
                continue;
            }
            let ctx = RuleContext::new(engine.now(), machine.id, machine.last_completed);
            let Some(chosen) = rule.select(queue.jobs(), &ctx).map(|j| j.id) else {
                continue;
            };
            let job = queue.remove(chosen).ok_or(SimError::JobNotQueued(chosen))?;
            debug!(now = %engine.now(), %rule, machine = machine.id.0, job = chosen.0, "dispatch");
            machine.assign(job, engine, world);
            assigned += 1;
        }
        Ok(assigned)
    }
}

fn take_only(queue: &mut JobQueue) -> Option<Job> {
    let id: JobId = queue.ids().next()?;
    queue.remove(id)
}
