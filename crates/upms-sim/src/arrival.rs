//! `ArrivalSource` — releases jobs into the queue at their arrival times.
//!
//! Jobs sharing a timestamp form one batch.  The whole batch is enqueued
//! before control returns to the caller, which notifies the coordinator once
//! per batch; a dispatch decision never sees half a batch.

use std::sync::Arc;

use tracing::debug;
use upms_core::{Instance, JobId};
use upms_engine::Engine;

use crate::{JobQueue, SimEvent, TraceEvent, TraceKind, World};

#[derive(Debug)]
pub struct ArrivalSource {
    instance: Arc<Instance>,
    /// Index of the next job to release.
    cursor:   usize,
}

impl ArrivalSource {
    pub fn new(instance: Arc<Instance>) -> Self {
        Self { instance, cursor: 0 }
    }

    /// Schedule the first batch.  Call once, at time zero.
    pub fn start(&self, engine: &mut Engine<SimEvent>) {
        let first = self.instance.arrival_at(0);
        if first.is_finite() {
            engine.advance(first.since(engine.now()), SimEvent::ArrivalBatch);
        }
    }

    /// Enqueue every job arriving now, publish the next arrival time, and
    /// schedule the following batch.  Returns the number of jobs released.
    pub fn emit_batch(
        &mut self,
        engine: &mut Engine<SimEvent>,
        world:  &mut World,
        queue:  &mut JobQueue,
    ) -> usize {
        let now = engine.now();
        let start = self.cursor;

        while self.cursor < self.instance.job_count() && self.instance.arrival_at(self.cursor) == now {
            let id = JobId(self.cursor as u32);
            queue.push(self.instance.build_job(id));
            world.record_trace(TraceEvent {
                time:    now,
                kind:    TraceKind::Arrive,
                job:     id,
                machine: None,
            });
            self.cursor += 1;
        }

        let next = self.instance.arrival_at(self.cursor);
        world.next_arrival = next;
        if next.is_finite() {
            engine.advance(next.since(now), SimEvent::ArrivalBatch);
        }

        let released = self.cursor - start;
        debug!(now = %now, released, queued = queue.len(), next = %next, "arrival batch");
        released
    }
}
